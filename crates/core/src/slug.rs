//! URL slug rules for portfolio items.
//!
//! A slug is 1 to [`MAX_SLUG_LEN`] characters of lowercase ASCII letters and
//! digits, grouped by single hyphens, with no leading or trailing hyphen.

use crate::error::CoreError;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 120;

/// Derive a slug from a free-text title.
///
/// Runs of anything that is not an ASCII letter or digit collapse into a
/// single hyphen. Returns `None` if the title contains no usable characters.
///
/// # Examples
///
/// ```
/// use gallery_core::slug::slugify;
/// assert_eq!(slugify("Koi & Lotus (2021)"), Some("koi-lotus-2021".to_string()));
/// assert_eq!(slugify("  --  "), None);
/// ```
pub fn slugify(title: &str) -> Option<String> {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    let trimmed = slug.trim_end_matches('-');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check that a caller-supplied slug follows the slug rules.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    let well_formed = slug
        .split('-')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "slug '{slug}' must be lowercase letters and digits separated by single hyphens"
        )));
    }
    Ok(())
}

/// Resolve the slug for a new item: validate the supplied one, or derive it
/// from the title when absent.
pub fn resolve_slug(supplied: Option<&str>, title: &str) -> Result<String, CoreError> {
    match supplied {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => slugify(title).ok_or_else(|| {
            CoreError::Validation(format!(
                "cannot derive a slug from title '{title}'; supply one explicitly"
            ))
        }),
    }
}
