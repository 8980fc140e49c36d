//! Column types shared by every table.

/// Primary keys are BIGSERIAL.
pub type DbId = i64;

/// Timestamps are stored as TIMESTAMPTZ and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Display position within one population. Not necessarily contiguous.
pub type SortOrder = i32;

/// Optimistic-concurrency counter, bumped on every write to a row.
pub type RowVersion = i32;
