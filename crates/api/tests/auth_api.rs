//! HTTP-level tests for the authentication extractor.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, send_request, test_token};
use gallery_api::auth::identity::{Identity, IdentityResolver, ResolveError};
use gallery_api::auth::jwt::{generate_token, AuthTokenConfig};
use serde_json::json;
use sqlx::PgPool;

fn create_request(auth: Option<(&str, String)>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/artwork")
        .header("content-type", "application/json");
    if let Some((name, value)) = auth {
        builder = builder.header(name, value);
    }
    builder
        .body(Body::from(json!({"title": "Guarded"}).to_string()))
        .unwrap()
}

async fn artwork_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM artwork")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_credentials_return_401(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = send_request(app, create_request(None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].is_string());
    assert_eq!(artwork_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bearer_token_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = create_request(Some(("authorization", format!("Bearer {}", test_token()))));
    let response = send_request(app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(artwork_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_cookie_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = create_request(Some(("cookie", format!("theme=dark; session={}", test_token()))));
    let response = send_request(app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_signed_with_other_secret_is_rejected(pool: PgPool) {
    let foreign = AuthTokenConfig {
        secret: "some-other-secret".to_string(),
        token_expiry_mins: 15,
    };
    let token = generate_token("intruder", "x@example.com", None, &foreign).unwrap();

    let app = common::build_test_app(pool.clone());
    let response = send_request(
        app,
        create_request(Some(("authorization", format!("Bearer {token}")))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(artwork_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_bearer_scheme_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send_request(
        app,
        create_request(Some(("authorization", "Basic dXNlcjpwYXNz".to_string()))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_reads_need_no_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/tattoos").await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Resolver whose backing store is unreachable.
struct UnavailableResolver;

#[async_trait]
impl IdentityResolver for UnavailableResolver {
    async fn resolve(&self, _token: &str) -> Result<Identity, ResolveError> {
        Err(ResolveError::Backend("session store connection refused".into()))
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolver_failure_returns_500_without_running_handler(pool: PgPool) {
    let app = common::build_test_app_with_identity(pool.clone(), Arc::new(UnavailableResolver));
    let request = create_request(Some(("authorization", format!("Bearer {}", test_token()))));
    let response = send_request(app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert_eq!(artwork_count(&pool).await, 0);
}
