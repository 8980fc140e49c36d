//! One-off `sort_order` backfill.
//!
//! Numbers every live artwork and tattoo `0..N-1` by ascending
//! `created_at` (ties by id), one transaction per population. Safe to
//! rerun; the result only changes if rows were added or deleted since.

use anyhow::{Context, Result};
use clap::Parser;
use gallery_core::work::WorkKind;
use gallery_db::repositories::SortOrderRepo;
use gallery_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for gallery-backfill.
#[derive(Parser, Debug)]
#[command(name = "gallery-backfill")]
#[command(about = "Assign sort_order to artwork and tattoos by creation time")]
#[command(version)]
struct Args {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Restrict the run to one population (default: both)
    #[arg(long)]
    kind: Option<WorkKind>,

    /// Compute and log the assignment without writing
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn kinds(&self) -> Vec<WorkKind> {
        match self.kind {
            Some(kind) => vec![kind],
            None => WorkKind::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallery_backfill=info,gallery_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let pool = gallery_db::create_pool(&args.database_url)
        .await
        .context("Failed to connect to database")?;
    gallery_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    let mut total = 0;
    for kind in args.kinds() {
        total += backfill_kind(&pool, kind, args.dry_run).await?;
    }

    tracing::info!(total, dry_run = args.dry_run, "Backfill finished");
    Ok(())
}

/// Backfill (or plan) one population. Returns the number of rows numbered.
async fn backfill_kind(pool: &DbPool, kind: WorkKind, dry_run: bool) -> Result<usize> {
    tracing::info!(%kind, dry_run, "Backfilling sort_order");

    let plan = if dry_run {
        SortOrderRepo::plan_backfill(pool, kind).await
    } else {
        SortOrderRepo::backfill(pool, kind).await
    }
    .with_context(|| format!("Backfill failed for {kind}; no {kind} rows were changed"))?;

    for assignment in &plan {
        tracing::debug!(%kind, id = assignment.id, sort_order = assignment.sort_order, "Assigned");
    }
    tracing::info!(%kind, count = plan.len(), dry_run, "Population done");
    Ok(plan.len())
}
