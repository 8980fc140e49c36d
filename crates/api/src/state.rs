use std::sync::Arc;

use crate::auth::identity::IdentityResolver;
use crate::config::ServerConfig;
use crate::delegates::DelegateClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Everything here is constructed in `main` (or a test harness) and passed
/// in; there are no process-wide singletons. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gallery_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolves request credentials to a caller identity.
    pub identity: Arc<dyn IdentityResolver>,
    /// HTTP client for the ticketing, AI extraction and Drive services.
    pub delegates: Arc<DelegateClient>,
}
