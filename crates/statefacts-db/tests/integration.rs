//! Integration tests for the `statefacts-db` Dragonfly backend.
//!
//! These tests require a live Dragonfly (or Redis) instance.
//! Run with:
//!
//! ```bash
//! docker run -d -p 6379:6379 docker.dragonflydb.io/dragonflydb/dragonfly
//! cargo test -p statefacts-db -- --ignored
//! ```
//!
//! All tests are marked `#[ignore]` so they are skipped during normal
//! `cargo test` runs.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use statefacts_db::{DragonflyPool, FactStore};
use statefacts_types::{FactDocument, StateCode};

/// Dragonfly connection URL for the local Docker instance.
const DRAGONFLY_URL: &str = "redis://localhost:6379";

async fn fresh_pool() -> DragonflyPool {
    let pool = DragonflyPool::connect(DRAGONFLY_URL)
        .await
        .expect("Failed to connect to Dragonfly -- is Docker running?");
    pool.flush_all().await.expect("Failed to flush Dragonfly");
    pool
}

fn doc(code: &str, facts: &[&str]) -> FactDocument {
    FactDocument::new(
        StateCode::normalize(code),
        facts.iter().map(|f| (*f).to_owned()).collect(),
    )
}

#[tokio::test]
#[ignore = "requires live Dragonfly instance"]
async fn dragonfly_find_one_missing() {
    let pool = fresh_pool().await;
    let found = pool
        .find_one(&StateCode::normalize("KS"))
        .await
        .expect("find_one failed");
    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires live Dragonfly instance"]
async fn dragonfly_save_and_find_one() {
    let pool = fresh_pool().await;
    let ks = doc("KS", &["A", "B"]);
    pool.save(&ks).await.expect("save failed");

    let found = pool
        .find_one(&StateCode::normalize("KS"))
        .await
        .expect("find_one failed");
    assert_eq!(found, Some(ks));
}

#[tokio::test]
#[ignore = "requires live Dragonfly instance"]
async fn dragonfly_find_all_uses_index() {
    let pool = fresh_pool().await;
    assert!(pool.find_all().await.expect("find_all failed").is_empty());

    pool.save(&doc("KS", &["A"])).await.expect("save failed");
    pool.save(&doc("OK", &["B"])).await.expect("save failed");
    pool.save(&doc("KS", &["A", "C"])).await.expect("save failed");

    let mut all = pool.find_all().await.expect("find_all failed");
    all.sort_by(|a, b| a.state_code.cmp(&b.state_code));
    assert_eq!(all, vec![doc("KS", &["A", "C"]), doc("OK", &["B"])]);
}
