//! The two orderable portfolio populations: artwork and tattoos.
//!
//! Both live in their own table with an identical ordering contract
//! (`sort_order`, `version`, `deleted_at`), so shared SQL is parameterised
//! by [`WorkKind`] rather than duplicated per table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One population of orderable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkKind {
    Artwork,
    Tattoos,
}

impl WorkKind {
    /// Every kind, in the order the backfill processes them.
    pub const ALL: [WorkKind; 2] = [WorkKind::Artwork, WorkKind::Tattoos];

    /// Backing table name. Only ever one of a fixed set of literals, so it is
    /// safe to interpolate into SQL.
    pub fn table(self) -> &'static str {
        match self {
            WorkKind::Artwork => "artwork",
            WorkKind::Tattoos => "tattoos",
        }
    }

    /// Human-readable entity name used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            WorkKind::Artwork => "Artwork",
            WorkKind::Tattoos => "Tattoo",
        }
    }
}

impl fmt::Display for WorkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for WorkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artwork" => Ok(WorkKind::Artwork),
            "tattoos" | "tattoo" => Ok(WorkKind::Tattoos),
            other => Err(format!(
                "Unknown work kind '{other}', expected 'artwork' or 'tattoos'"
            )),
        }
    }
}
