//! Repository for the `workflow_rules` table.

use gallery_core::types::DbId;
use sqlx::PgPool;

use crate::models::workflow_rule::{CreateWorkflowRule, WorkflowRule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, trigger_event, action, config, is_enabled, created_at, updated_at";

/// Provides CRUD operations and the enable toggle for workflow rules.
pub struct WorkflowRuleRepo;

impl WorkflowRuleRepo {
    /// Insert a new rule, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWorkflowRule,
    ) -> Result<WorkflowRule, sqlx::Error> {
        let query = format!(
            "INSERT INTO workflow_rules (name, trigger_event, action, config, is_enabled) \
             VALUES ($1, $2, $3, COALESCE($4, '{{}}'::jsonb), COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkflowRule>(&query)
            .bind(&input.name)
            .bind(&input.trigger_event)
            .bind(&input.action)
            .bind(&input.config)
            .bind(input.is_enabled)
            .fetch_one(pool)
            .await
    }

    /// Find a rule by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkflowRule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workflow_rules WHERE id = $1");
        sqlx::query_as::<_, WorkflowRule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rules ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkflowRule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workflow_rules ORDER BY name, id");
        sqlx::query_as::<_, WorkflowRule>(&query)
            .fetch_all(pool)
            .await
    }

    /// Enable or disable a rule.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_enabled(
        pool: &PgPool,
        id: DbId,
        is_enabled: bool,
    ) -> Result<Option<WorkflowRule>, sqlx::Error> {
        let query = format!(
            "UPDATE workflow_rules SET is_enabled = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkflowRule>(&query)
            .bind(id)
            .bind(is_enabled)
            .fetch_optional(pool)
            .await
    }
}
