//! Display-order writes: batch reorder and the initial backfill.
//!
//! Both operations run in a single transaction per population, so a
//! failure anywhere leaves every `sort_order` in that table untouched.

use gallery_core::backfill::{plan_backfill, BackfillCandidate, SortAssignment};
use gallery_core::error::CoreError;
use gallery_core::reorder::ReorderEntry;
use gallery_core::types::{DbId, Timestamp};
use gallery_core::work::WorkKind;
use sqlx::{PgConnection, PgPool};

use crate::models::work::{ReorderOutcome, WorkRow};

/// Errors from the backfill.
#[derive(Debug, thiserror::Error)]
pub enum BackfillError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Provides ordering mutations for any [`WorkRow`] type.
pub struct SortOrderRepo;

impl SortOrderRepo {
    /// Apply a validated reorder batch all-or-nothing.
    ///
    /// Each entry sets `sort_order` on a live row and bumps its `version`.
    /// An entry carrying `version` only applies if the row is still at that
    /// version. The first entry that does not apply rolls back the whole
    /// batch and is reported in the returned [`ReorderOutcome`].
    pub async fn reorder<T: WorkRow>(
        pool: &PgPool,
        entries: &[ReorderEntry],
    ) -> Result<ReorderOutcome<T>, sqlx::Error> {
        let table = T::KIND.table();
        let update = format!(
            "UPDATE {table} SET sort_order = $2, version = version + 1 \
             WHERE id = $1 AND deleted_at IS NULL \
               AND ($3::INTEGER IS NULL OR version = $3) \
             RETURNING {}",
            T::COLUMNS
        );

        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(entries.len());

        for entry in entries {
            let row = sqlx::query_as::<_, T>(&update)
                .bind(entry.id)
                .bind(entry.sort_order)
                .bind(entry.version)
                .fetch_optional(&mut *tx)
                .await?;

            match row {
                Some(row) => rows.push(row),
                None => {
                    let current = Self::current_version(&mut tx, T::KIND, entry.id).await?;
                    tx.rollback().await?;
                    return Ok(match (current, entry.version) {
                        (Some(current), Some(expected)) => ReorderOutcome::Stale {
                            id: entry.id,
                            expected,
                            current,
                        },
                        _ => ReorderOutcome::Missing { id: entry.id },
                    });
                }
            }
        }

        tx.commit().await?;
        Ok(ReorderOutcome::Applied(rows))
    }

    /// Compute the backfill assignment for one population without writing.
    pub async fn plan_backfill(
        pool: &PgPool,
        kind: WorkKind,
    ) -> Result<Vec<SortAssignment>, BackfillError> {
        let mut conn = pool.acquire().await?;
        let candidates = Self::backfill_candidates(&mut conn, kind, false).await?;
        Ok(plan_backfill(&candidates)?)
    }

    /// Number every live row of `kind` `0..N-1` by ascending `created_at`.
    ///
    /// Rows are locked for the duration of the transaction. Returns the
    /// assignment that was written.
    pub async fn backfill(
        pool: &PgPool,
        kind: WorkKind,
    ) -> Result<Vec<SortAssignment>, BackfillError> {
        let mut tx = pool.begin().await?;

        let candidates = Self::backfill_candidates(&mut tx, kind, true).await?;
        let plan = plan_backfill(&candidates)?;

        let ids: Vec<DbId> = plan.iter().map(|a| a.id).collect();
        let orders: Vec<i32> = plan.iter().map(|a| a.sort_order).collect();

        let query = format!(
            "UPDATE {table} AS t \
             SET sort_order = v.sort_order, version = t.version + 1 \
             FROM UNNEST($1::BIGINT[], $2::INTEGER[]) AS v(id, sort_order) \
             WHERE t.id = v.id",
            table = kind.table()
        );
        let result = sqlx::query(&query)
            .bind(&ids)
            .bind(&orders)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            %kind,
            planned = plan.len(),
            updated = result.rows_affected(),
            "Backfill committed",
        );
        Ok(plan)
    }

    async fn backfill_candidates(
        conn: &mut PgConnection,
        kind: WorkKind,
        lock: bool,
    ) -> Result<Vec<BackfillCandidate>, sqlx::Error> {
        let query = format!(
            "SELECT id, created_at FROM {} \
             WHERE deleted_at IS NULL \
             ORDER BY created_at, id{}",
            kind.table(),
            if lock { " FOR UPDATE" } else { "" }
        );
        let rows = sqlx::query_as::<_, (DbId, Timestamp)>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, created_at)| BackfillCandidate { id, created_at })
            .collect())
    }

    async fn current_version(
        conn: &mut PgConnection,
        kind: WorkKind,
        id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let query = format!(
            "SELECT version FROM {} WHERE id = $1 AND deleted_at IS NULL",
            kind.table()
        );
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
