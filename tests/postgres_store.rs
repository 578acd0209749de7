//! PgProductStore 针对真实 PostgreSQL 的测试
//!
//! 需要 `DATABASE_URL`，运行方式：`cargo test --test postgres_store -- --ignored`。
//! 每个测试在独立 schema 中建表，结束后删除。

use chrono::{Duration, Utc};
use product_service::{
    app::product::{NewProduct, OrderKey, Product, ProductStore, ProductUpdate, StoreError},
    config::{AppConfig, DatabaseConfig},
    infrastructure::{database::DatabaseManager, PgProductStore},
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

const CREATE_TABLE: &str = "CREATE TABLE product (
    id_product       VARCHAR(25),
    product_name     VARCHAR(25),
    price            INTEGER,
    description      TEXT,
    quantity         INTEGER,
    created_datetime TIMESTAMPTZ,
    updated_datetime TIMESTAMPTZ,
    active           BOOLEAN
)";

struct TestDatabase {
    admin: PgPool,
    schema: String,
    store: PgProductStore,
}

impl TestDatabase {
    async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let schema = format!("product_test_{}", Uuid::new_v4().simple());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .unwrap();
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .unwrap();

        let config = DatabaseConfig {
            url,
            schema: schema.clone(),
            max_connections: 2,
            min_connections: 0,
            ..DatabaseConfig::default()
        };
        let pool = DatabaseManager::new(&AppConfig::default(), &config)
            .await
            .unwrap()
            .into_pool();
        sqlx::query(CREATE_TABLE).execute(&pool).await.unwrap();

        Self {
            admin,
            schema,
            store: PgProductStore::new(pool),
        }
    }

    async fn drop(self) {
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .unwrap();
    }
}

fn new_product(id: &str, name: &str, price: i32, minutes_ago: i64) -> NewProduct {
    NewProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        price,
        quantity: 1,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        active: true,
    }
}

fn ids(rows: &[Product]) -> Vec<&str> {
    rows.iter().map(|p| p.id.as_str()).collect()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_list_orderings() {
    let db = TestDatabase::new().await;

    for product in [
        new_product("100001", "Mango", 30, 5),
        new_product("100002", "Apple", 50, 4),
        new_product("100003", "Cherry", 10, 3),
        new_product("100004", "Banana", 40, 2),
    ] {
        db.store.insert(&product).await.unwrap();
    }

    let newest = db.store.list(OrderKey::CreatedDesc).await.unwrap();
    assert_eq!(ids(&newest), ["100004", "100003", "100002", "100001"]);
    assert!(newest.iter().all(|p| p.updated_at.is_none() && p.active));
    assert_eq!(newest[0].name, "Banana");
    assert_eq!(newest[0].description, "Banana description");

    let high = db.store.list(OrderKey::PriceDesc).await.unwrap();
    assert_eq!(ids(&high), ["100002", "100004", "100001", "100003"]);

    let low = db.store.list(OrderKey::PriceAsc).await.unwrap();
    assert_eq!(ids(&low), ["100003", "100001", "100004", "100002"]);

    let a_z = db.store.list(OrderKey::NameAsc).await.unwrap();
    assert_eq!(ids(&a_z), ["100002", "100004", "100003", "100001"]);

    // z-a 按创建时间倒序
    let z_a = db.store.list(OrderKey::NameDesc).await.unwrap();
    assert_eq!(ids(&z_a), ids(&newest));

    db.drop().await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_empty_table_lists_nothing() {
    let db = TestDatabase::new().await;

    for order in OrderKey::ALL {
        assert!(db.store.list(order).await.unwrap().is_empty());
    }

    db.drop().await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_by_id_returns_last_match() {
    let db = TestDatabase::new().await;

    db.store
        .insert(&new_product("200001", "Old", 10, 10))
        .await
        .unwrap();
    db.store
        .insert(&new_product("200001", "New", 20, 1))
        .await
        .unwrap();

    let found = db.store.get_by_id("200001").await.unwrap();
    assert_eq!(found.name, "New");
    assert_eq!(found.price, 20);

    let missing = db.store.get_by_id("999999").await;
    assert!(matches!(missing, Err(StoreError::NotFound(id)) if id == "999999"));

    db.drop().await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_and_delete_by_id() {
    let db = TestDatabase::new().await;

    db.store
        .insert(&new_product("300001", "Lamp", 15, 2))
        .await
        .unwrap();
    db.store
        .insert(&new_product("300002", "Desk", 90, 1))
        .await
        .unwrap();

    let update = ProductUpdate {
        name: "Floor Lamp".to_string(),
        description: "tall".to_string(),
        price: 25,
        quantity: 7,
        updated_at: Utc::now(),
    };
    db.store.update_by_id("300001", &update).await.unwrap();

    let updated = db.store.get_by_id("300001").await.unwrap();
    assert_eq!(updated.name, "Floor Lamp");
    assert_eq!(updated.description, "tall");
    assert_eq!(updated.price, 25);
    assert_eq!(updated.quantity, 7);
    assert!(updated.updated_at.is_some());

    // 不存在的编号静默成功
    db.store.update_by_id("000000", &update).await.unwrap();
    db.store.delete_by_id("000000").await.unwrap();

    db.store.delete_by_id("300001").await.unwrap();
    let rows = db.store.list(OrderKey::CreatedDesc).await.unwrap();
    assert_eq!(ids(&rows), ["300002"]);

    db.drop().await;
}
