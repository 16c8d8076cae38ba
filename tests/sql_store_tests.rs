//! Runs against live databases only when their URLs are provided:
//! `TEST_MYSQL_URL` (e.g. `mysql://root:pw@127.0.0.1/visits`) and
//! `TEST_POSTGRES_URL`. Without them each test returns early.

use sqlx::{MySqlPool, PgPool};
use std::time::{SystemTime, UNIX_EPOCH};
use visit_logger::db::{MySqlVisitStore, PgVisitStore, Visit, VisitStore};

/// Later than any real timestamp, so these rows sort first.
const FAR_FUTURE: &str = "9999-12-31T23:59:59.999Z";

fn unique_tag() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    format!("t{}", nanos % 1_000_000_000)
}

async fn assert_newest_first_with_tiebreak(store: &dyn VisitStore, tag: &str) {
    store.ensure_schema().await.expect("schema");
    // Idempotent.
    store.ensure_schema().await.expect("schema again");

    for n in 1..=3 {
        store
            .insert(&Visit::new(FAR_FUTURE, format!("{tag}{n}")))
            .await
            .expect("insert");
    }

    let recent = store.select_recent(3).await.expect("select");
    let hashes: Vec<_> = recent.into_iter().map(|v| v.address_hash).collect();
    assert_eq!(
        hashes,
        [format!("{tag}3"), format!("{tag}2"), format!("{tag}1")]
    );
}

#[tokio::test]
async fn mysql_store_orders_and_prepares_schema() {
    let Ok(url) = std::env::var("TEST_MYSQL_URL") else {
        return;
    };
    let pool = MySqlPool::connect(&url).await.expect("connect");
    let store = MySqlVisitStore::new(pool.clone());
    let tag = unique_tag();

    assert_newest_first_with_tiebreak(&store, &tag).await;

    sqlx::query("DELETE FROM visits WHERE timestamp = ?")
        .bind(FAR_FUTURE)
        .execute(&pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn postgres_store_orders_and_prepares_schema() {
    let Ok(url) = std::env::var("TEST_POSTGRES_URL") else {
        return;
    };
    let pool = PgPool::connect(&url).await.expect("connect");
    let store = PgVisitStore::new(pool.clone());
    let tag = unique_tag();

    assert_newest_first_with_tiebreak(&store, &tag).await;

    sqlx::query("DELETE FROM visits WHERE timestamp = $1")
        .bind(FAR_FUTURE)
        .execute(&pool)
        .await
        .expect("cleanup");
}
