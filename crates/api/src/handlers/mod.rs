pub mod artwork;
pub mod checkout;
pub mod drive;
pub mod tattoo;
pub mod work;
pub mod work_relationship;
pub mod workflow_rule;
