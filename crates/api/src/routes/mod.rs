pub mod artwork;
pub mod checkout;
pub mod drive;
pub mod health;
pub mod tattoos;
pub mod work_relationship;
pub mod workflow_rule;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artwork                                     list, create
/// /artwork/by-slug                             lookup by slug (GET)
/// /artwork/search                              full-text search (GET)
/// /artwork/reorder                             batch reorder (PUT)
/// /artwork/{id}                                get, update, delete
/// /artwork/{id}/relationships                  linked tattoos (GET)
/// /artwork/{id}/extract-metadata               AI metadata (POST)
///
/// /tattoos/...                                 same shape as /artwork
///
/// /work-relationships                          create (POST)
/// /work-relationships/{id}                     delete (DELETE)
///
/// /workflow-rules                              list, create
/// /workflow-rules/{id}                         get
/// /workflow-rules/{id}/enabled                 toggle (PUT)
///
/// /checkout/sessions                           create (POST, public)
/// /checkout/sessions/{id}                      get (GET, public)
///
/// /drive/import                                import folder (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artwork", artwork::router())
        .nest("/tattoos", tattoos::router())
        .nest("/work-relationships", work_relationship::router())
        .nest("/workflow-rules", workflow_rule::router())
        .nest("/checkout/sessions", checkout::router())
        .nest("/drive", drive::router())
}
