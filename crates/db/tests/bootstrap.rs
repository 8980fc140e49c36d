use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    gallery_db::health_check(&pool).await.unwrap();

    let tables = ["artwork", "tattoos", "work_relationships", "workflow_rules"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// `is_enabled` is a real boolean column, not an integer.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_workflow_rule_flag_is_boolean(pool: PgPool) {
    let data_type: (String,) = sqlx::query_as(
        "SELECT data_type FROM information_schema.columns \
         WHERE table_name = 'workflow_rules' AND column_name = 'is_enabled'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(data_type.0, "boolean");
}
