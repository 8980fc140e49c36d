//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod artwork_repo;
pub mod sort_order_repo;
pub mod tattoo_repo;
pub mod work_relationship_repo;
pub mod work_repo;
pub mod workflow_rule_repo;

pub use artwork_repo::ArtworkRepo;
pub use sort_order_repo::{BackfillError, SortOrderRepo};
pub use tattoo_repo::TattooRepo;
pub use work_relationship_repo::WorkRelationshipRepo;
pub use work_repo::WorkRepo;
pub use workflow_rule_repo::WorkflowRuleRepo;
