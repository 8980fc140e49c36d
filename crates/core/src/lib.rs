//! Domain logic shared by the API server and the backfill binary.
//!
//! Nothing in this crate performs I/O; database and HTTP concerns live in
//! `gallery-db` and `gallery-api`.

pub mod backfill;
pub mod error;
pub mod flag;
pub mod reorder;
pub mod search;
pub mod slug;
pub mod types;
pub mod work;
