//! Workflow rule entity model and DTOs.

use gallery_core::flag::deserialize_enabled;
use gallery_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workflow_rules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkflowRule {
    pub id: DbId,
    pub name: String,
    pub trigger_event: String,
    pub action: String,
    pub config: serde_json::Value,
    pub is_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a workflow rule. New rules are enabled unless stated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkflowRule {
    pub name: String,
    pub trigger_event: String,
    pub action: String,
    pub config: Option<serde_json::Value>,
    pub is_enabled: Option<bool>,
}

/// Body of the enable/disable toggle. Accepts `true`/`false` or `1`/`0`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetWorkflowRuleEnabled {
    #[serde(deserialize_with = "deserialize_enabled")]
    pub is_enabled: bool,
}
