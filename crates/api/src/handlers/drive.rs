//! Google Drive folder import.
//!
//! Lists a Drive folder through the Drive delegate and creates one
//! unpublished item per image that is not already attached to a live row.
//! Reruns over the same folder are idempotent. Items are created one at a
//! time, so a failure partway through keeps the items already imported.
//! A slug already taken (by a user or by another file id that slugifies
//! the same way) is retried with a numeric suffix.

use std::collections::HashSet;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::slug::{slugify, MAX_SLUG_LEN};
use gallery_core::work::WorkKind;
use gallery_db::models::artwork::{Artwork, CreateArtwork};
use gallery_db::models::tattoo::{CreateTattoo, Tattoo};
use gallery_db::repositories::{ArtworkRepo, TattooRepo, WorkRepo};
use serde::{Deserialize, Serialize};

use crate::delegates::DriveFile;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Slug variants tried per file before the conflict is reported.
const MAX_SLUG_ATTEMPTS: u32 = 20;

/// Body of `POST /api/v1/drive/import`.
#[derive(Debug, Deserialize)]
pub struct DriveImportRequest {
    pub folder_id: String,
    pub kind: WorkKind,
}

/// A row created by an import.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ImportedWork {
    Artwork(Artwork),
    Tattoo(Tattoo),
}

/// Response body for an import.
#[derive(Debug, Serialize)]
pub struct DriveImportResponse {
    pub imported: usize,
    pub skipped: usize,
    pub data: Vec<ImportedWork>,
}

/// POST /api/v1/drive/import
pub async fn import(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<DriveImportRequest>, JsonRejection>,
) -> AppResult<Json<DriveImportResponse>> {
    let Json(input) = body?;
    let folder_id = input.folder_id.trim();
    let well_formed = !folder_id.is_empty()
        && folder_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !well_formed {
        return Err(
            CoreError::Validation(format!("invalid folder_id '{}'", input.folder_id)).into(),
        );
    }

    let files = state.delegates.list_drive_files(folder_id).await?;
    let ids: Vec<String> = files.iter().map(|f| f.id.clone()).collect();
    let existing: HashSet<String> =
        WorkRepo::existing_drive_file_ids(&state.pool, input.kind, &ids)
            .await?
            .into_iter()
            .collect();

    let mut seen = HashSet::new();
    let fresh: Vec<&DriveFile> = files
        .iter()
        .filter(|f| !existing.contains(&f.id) && seen.insert(f.id.as_str()))
        .collect();
    let skipped = files.len() - fresh.len();

    let mut data = Vec::with_capacity(fresh.len());
    for file in fresh {
        let title = title_from_filename(&file.name);
        let base = import_slug(&title, &file.id);
        let mut attempt = 1;
        let created = loop {
            let slug = numbered_slug(&base, attempt);
            match create_imported(&state, input.kind, file, &title, slug).await {
                Err(err) if is_slug_conflict(&err) && attempt < MAX_SLUG_ATTEMPTS => {
                    attempt += 1;
                }
                other => break other?,
            }
        };
        data.push(created);
    }

    tracing::info!(
        kind = %input.kind,
        folder_id,
        imported = data.len(),
        skipped,
        user_id = %user.id,
        "Drive import finished",
    );

    Ok(Json(DriveImportResponse {
        imported: data.len(),
        skipped,
        data,
    }))
}

/// Insert one unpublished row for a Drive file.
async fn create_imported(
    state: &AppState,
    kind: WorkKind,
    file: &DriveFile,
    title: &str,
    slug: String,
) -> Result<ImportedWork, sqlx::Error> {
    let created = match kind {
        WorkKind::Artwork => ImportedWork::Artwork(
            ArtworkRepo::create(
                &state.pool,
                &CreateArtwork {
                    title: title.to_string(),
                    slug: Some(slug),
                    image_url: Some(file.url.clone()),
                    drive_file_id: Some(file.id.clone()),
                    is_published: Some(false),
                    ..Default::default()
                },
            )
            .await?,
        ),
        WorkKind::Tattoos => ImportedWork::Tattoo(
            TattooRepo::create(
                &state.pool,
                &CreateTattoo {
                    title: title.to_string(),
                    slug: Some(slug),
                    image_url: Some(file.url.clone()),
                    drive_file_id: Some(file.id.clone()),
                    is_published: Some(false),
                    ..Default::default()
                },
            )
            .await?,
        ),
    };
    Ok(created)
}

/// Unique violation on one of the `uq_*_slug` indexes.
fn is_slug_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err
                    .constraint()
                    .is_some_and(|c| c.starts_with("uq_") && c.ends_with("_slug"))
        }
        _ => false,
    }
}

/// `base` on the first attempt, then `base-2`, `base-3`, ... kept within
/// the slug length limit.
fn numbered_slug(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        return base.to_string();
    }
    let suffix = format!("-{attempt}");
    let budget = MAX_SLUG_LEN.saturating_sub(suffix.len());
    let head: String = base.chars().take(budget).collect();
    format!("{}{suffix}", head.trim_end_matches('-'))
}

/// Turn `"koi_sleeve-final.JPG"` into `"koi sleeve final"`.
fn title_from_filename(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains(' ') => stem,
        _ => name,
    };
    let title = stem
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title
    }
}

/// Slug unique to the Drive file: title words followed by the file id.
fn import_slug(title: &str, file_id: &str) -> String {
    let suffix = slugify(file_id).unwrap_or_else(|| "drive".to_string());
    let budget = MAX_SLUG_LEN.saturating_sub(suffix.len() + 1);
    let head = slugify(title)
        .map(|s| {
            let cut: String = s.chars().take(budget).collect();
            cut.trim_end_matches('-').to_string()
        })
        .filter(|s| !s.is_empty());
    match head {
        Some(head) => format!("{head}-{suffix}"),
        None => suffix,
    }
}
