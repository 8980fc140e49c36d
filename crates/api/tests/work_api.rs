//! HTTP-level tests for artwork/tattoo CRUD, slug lookup, search and the
//! soft-delete filter.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_work, delete, delete_auth, get, post_json, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_artwork_derives_slug_and_appends(pool: PgPool) {
    let first = create_work(&pool, "artwork", json!({"title": "Koi & Lotus"})).await;
    assert_eq!(first["slug"], "koi-lotus");
    assert_eq!(first["sort_order"], 0);
    assert_eq!(first["is_published"], false);

    let second = create_work(
        &pool,
        "artwork",
        json!({"title": "Second", "medium": "ink", "price_cents": 12000}),
    )
    .await;
    assert_eq!(second["sort_order"], 1);
    assert_eq!(second["medium"], "ink");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tattoo_with_explicit_slug(pool: PgPool) {
    let tattoo = create_work(
        &pool,
        "tattoos",
        json!({"title": "Sleeve", "slug": "koi-sleeve", "style": "japanese", "placement": "arm"}),
    )
    .await;
    assert_eq!(tattoo["slug"], "koi-sleeve");
    assert_eq!(tattoo["style"], "japanese");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_invalid_slug_and_blank_title(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/artwork",
        json!({"title": "Fine", "slug": "Not A Slug"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/artwork", json!({"title": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_conflicts(pool: PgPool) {
    create_work(&pool, "artwork", json!({"title": "Rose"})).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/artwork", json!({"title": "Rose"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/tattoos", json!({"title": "Nope"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tattoos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Read / update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_by_id_and_missing(pool: PgPool) {
    let created = create_work(&pool, "artwork", json!({"title": "Crane"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/artwork/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Crane");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/artwork/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_fields_and_bumps_version(pool: PgPool) {
    let created = create_work(&pool, "tattoos", json!({"title": "Draft"})).await;
    let id = created["id"].as_i64().unwrap();
    let version = created["version"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/tattoos/{id}"),
        json!({"title": "Final", "is_published": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Final");
    assert_eq!(json["data"]["slug"], "draft");
    assert_eq!(json["data"]["is_published"], true);
    assert_eq!(json["data"]["version"], version + 1);

    let app = common::build_test_app(pool);
    let response = put_json_auth(app, "/api/v1/tattoos/999999", json!({"title": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_published(pool: PgPool) {
    let public = create_work(&pool, "artwork", json!({"title": "Public", "is_published": true})).await;
    let draft = create_work(&pool, "artwork", json!({"title": "Draft"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/artwork").await).await;
    assert_eq!(ids(&json), vec![public["id"].as_i64().unwrap(), draft["id"].as_i64().unwrap()]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/artwork?published=true").await).await;
    assert_eq!(ids(&json), vec![public["id"].as_i64().unwrap()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_lookup_respects_published_flag(pool: PgPool) {
    create_work(&pool, "artwork", json!({"title": "Hidden Heron"})).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/artwork/by-slug?slug=hidden-heron").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/artwork/by-slug?slug=hidden-heron&published=true").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_prefix_matches_title(pool: PgPool) {
    let dragon = create_work(&pool, "tattoos", json!({"title": "Dragon back piece"})).await;
    create_work(&pool, "tattoos", json!({"title": "Peony"})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/tattoos/search?q=drag").await).await;
    assert_eq!(ids(&json), vec![dragon["id"].as_i64().unwrap()]);
}

// ---------------------------------------------------------------------------
// Soft delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_item_disappears_from_every_read(pool: PgPool) {
    let gone = create_work(&pool, "artwork", json!({"title": "Vanishing Moth"})).await;
    let kept = create_work(&pool, "artwork", json!({"title": "Staying Moth"})).await;
    let id = gone["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/artwork/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, &format!("/api/v1/artwork/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, "/api/v1/artwork/by-slug?slug=vanishing-moth").await.status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/artwork").await).await;
    assert_eq!(ids(&json), vec![kept["id"].as_i64().unwrap()]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/artwork/search?q=moth").await).await;
    assert_eq!(ids(&json), vec![kept["id"].as_i64().unwrap()]);

    // Deleting again is a 404; the row is still in the table.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/artwork/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let deleted: bool = sqlx::query_scalar("SELECT deleted_at IS NOT NULL FROM artwork WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_requires_auth(pool: PgPool) {
    let created = create_work(&pool, "tattoos", json!({"title": "Guarded"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/tattoos/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/tattoos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Malformed path and query
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_path_and_query_return_json_errors(pool: PgPool) {
    for uri in [
        "/api/v1/artwork/abc",
        "/api/v1/artwork/by-slug",
        "/api/v1/tattoos?limit=lots",
        "/api/v1/tattoos/search?q=koi&offset=x",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "{uri}");
        assert!(json["error"].is_string(), "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_id_on_delete_is_a_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/tattoos/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
