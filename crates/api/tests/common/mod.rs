#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use gallery_api::auth::identity::{IdentityResolver, JwtIdentityResolver};
use gallery_api::auth::jwt::{generate_token, AuthTokenConfig};
use gallery_api::config::ServerConfig;
use gallery_api::delegates::{DelegateClient, DelegateConfig};
use gallery_api::routes;
use gallery_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-that-is-long-enough";

pub fn test_auth_config() -> AuthTokenConfig {
    AuthTokenConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults and no delegates.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: test_auth_config(),
        delegates: DelegateConfig {
            timeout_secs: 5,
            ..Default::default()
        },
    }
}

/// A valid token for a fixed test user.
pub fn test_token() -> String {
    generate_token("user-1", "owner@example.com", Some("Owner"), &test_auth_config()).unwrap()
}

/// Build the full application router with all middleware layers.
///
/// Mirrors `main.rs` so tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config(), None)
}

/// Same as [`build_test_app`] with a custom identity resolver.
pub fn build_test_app_with_identity(pool: PgPool, identity: Arc<dyn IdentityResolver>) -> Router {
    build_test_app_with_config(pool, test_config(), Some(identity))
}

/// Same as [`build_test_app`] with delegate base URLs pointed elsewhere.
pub fn build_test_app_with_delegates(pool: PgPool, delegates: DelegateConfig) -> Router {
    let mut config = test_config();
    config.delegates = delegates;
    build_test_app_with_config(pool, config, None)
}

fn build_test_app_with_config(
    pool: PgPool,
    config: ServerConfig,
    identity: Option<Arc<dyn IdentityResolver>>,
) -> Router {
    let identity: Arc<dyn IdentityResolver> = match identity {
        Some(identity) => identity,
        None => Arc::new(JwtIdentityResolver::new(config.auth.clone())),
    };
    let state = AppState {
        pool,
        identity,
        delegates: Arc::new(DelegateClient::new(config.delegates.clone()).unwrap()),
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// Used to stand in for the external delegates.
pub async fn spawn_fake_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: &serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(&test_token()))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, Some(&test_token()))).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body, None)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body, Some(&test_token()))).await
}

/// PUT a raw (possibly malformed) body with auth.
pub async fn put_raw_auth(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", test_token()))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn delete_auth(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(&test_token()))).await
}

/// Send an arbitrary request (custom headers, cookies).
pub async fn send_request(app: Router, request: Request<Body>) -> Response {
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create an item through the API and return its JSON representation.
pub async fn create_work(pool: &PgPool, kind: &str, body: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, &format!("/api/v1/{kind}"), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
