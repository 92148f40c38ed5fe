//! Postgres item store tests.
//!
//! Need a live database: run with `DATABASE_URL=... cargo test -- --ignored`.

use perfdash_core::{Item, ItemKey};
use perfdash_db::{ItemStore, PgItemStore};
use serde_json::json;
use sqlx::PgPool;

fn item(pk: &str, sk: &str, name: &str) -> Item {
    serde_json::from_value(json!({
        "pk": pk,
        "sk": sk,
        "type": "Widget",
        "name": name,
    }))
    .unwrap()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn put_get_and_replace(pool: PgPool) {
    perfdash_db::health_check(&pool).await.unwrap();
    let store = PgItemStore::new(pool);

    store.put(item("Dashboard#D1", "Widget#W1", "a")).await.unwrap();
    store.put(item("Dashboard#D1", "Widget#W1", "b")).await.unwrap();

    let stored = store
        .get(&ItemKey::new("Dashboard#D1", "Widget#W1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.attributes["name"], "b");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn query_is_scoped_to_partition_and_sorted(pool: PgPool) {
    let store = PgItemStore::new(pool);
    store.put(item("Dashboard#D1", "Widget#b", "b")).await.unwrap();
    store.put(item("Dashboard#D1", "Widget#a", "a")).await.unwrap();
    store.put(item("Dashboard#D2", "Widget#c", "c")).await.unwrap();

    let found = store.query("Dashboard#D1").await.unwrap();
    let sks: Vec<_> = found.iter().map(|i| i.sk.as_str()).collect();
    assert_eq!(sks, ["Widget#a", "Widget#b"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn delete_reports_existence(pool: PgPool) {
    let store = PgItemStore::new(pool);
    let key = ItemKey::new("Dataset#x", "Dataset#x");
    store.put(item(&key.pk, &key.sk, "x")).await.unwrap();

    assert!(store.delete(&key).await.unwrap());
    assert!(!store.delete(&key).await.unwrap());
    assert_eq!(store.get(&key).await.unwrap(), None);
}
