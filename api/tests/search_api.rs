use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema,
};
use serde_json::{Value, json};
use storefront_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::{Args, DatabaseArgs, LogArgs, ServerArgs},
};
use storefront_core::{
    application::service_from_connection,
    entity::{categories, orders, products, users, wishlists},
};

fn args() -> Args {
    Args {
        db: DatabaseArgs {
            database_host: "localhost".to_string(),
            database_port: 5432,
            database_user: "postgres".to_string(),
            database_password: "postgres".to_string(),
            database_name: "storefront".to_string(),
        },
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            metrics: false,
        },
        log: LogArgs {
            log_filter: "debug".to_string(),
            log_json: false,
        },
    }
}

fn timestamp(hours: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap()
        + Duration::hours(hours)
}

fn product(id: i32, name: &str, price: f64, category_id: i32) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        brand_id: Set(1),
        price: Set(price),
        main_image_url: Set(None),
        stock: Set(10),
        category_id: Set(category_id),
        collab_status: Set(0),
        create_date: Set(timestamp(id as i64)),
        update_date: Set(None),
    }
}

fn user(id: i32, username: &str, is_deleted: bool) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(id),
        username: Set(Some(username.to_string())),
        password: Set(Some("$argon2id$secret".to_string())),
        email: Set(Some(format!("{username}@example.com"))),
        full_name: Set(None),
        phone: Set(None),
        address: Set(None),
        avatar: Set(None),
        is_active: Set(true),
        role: Set("customer".to_string()),
        is_deleted: Set(is_deleted),
        create_date: Set(timestamp(id as i64)),
        update_date: Set(None),
    }
}

async fn database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    for statement in [
        schema.create_table_from_entity(categories::Entity),
        schema.create_table_from_entity(products::Entity),
        schema.create_table_from_entity(users::Entity),
        schema.create_table_from_entity(wishlists::Entity),
        schema.create_table_from_entity(orders::Entity),
    ] {
        db.execute(backend.build(&statement)).await.unwrap();
    }

    let catalog = (1..=12)
        .map(|id| {
            let price = if id <= 7 { 10.0 * id as f64 } else { 50.0 * (id - 6) as f64 };
            let name = if id == 1 {
                "Nike Air Max".to_string()
            } else {
                format!("Sneaker {id}")
            };
            product(id, &name, price, id % 3 + 1)
        })
        .collect::<Vec<_>>();
    products::Entity::insert_many(catalog).exec(&db).await.unwrap();

    categories::Entity::insert_many(["Sneakers", "Boots", "Sandals"].iter().enumerate().map(
        |(index, name)| categories::ActiveModel {
            id: Set(index as i32 + 1),
            name_category: Set(name.to_string()),
        },
    ))
    .exec(&db)
    .await
    .unwrap();

    users::Entity::insert_many([
        user(1, "alice", false),
        user(2, "bob", false),
        user(3, "ghost", true),
    ])
    .exec(&db)
    .await
    .unwrap();

    wishlists::Entity::insert_many([1, 8, 9].map(|product_id| wishlists::ActiveModel {
        product_id: Set(product_id),
        user_id: Set(1),
        ..Default::default()
    }))
    .exec(&db)
    .await
    .unwrap();

    orders::Entity::insert_many([
        orders::ActiveModel {
            id: Set(1),
            product_id: Set(1),
            user_id: Set(1),
            quantity: Set(1),
            total_price: Set(10.0),
            status: Set("delivered".to_string()),
            created_at: Set(timestamp(1)),
        },
        orders::ActiveModel {
            id: Set(2),
            product_id: Set(9),
            user_id: Set(1),
            quantity: Set(2),
            total_price: Set(300.0),
            status: Set("pending".to_string()),
            created_at: Set(timestamp(2)),
        },
    ])
    .exec(&db)
    .await
    .unwrap();

    db
}

async fn server() -> TestServer {
    let db = database().await;
    let state = AppState::new(Arc::new(args()), service_from_connection(db));
    TestServer::new(router(state).unwrap()).unwrap()
}

fn item_ids(body: &Value) -> Vec<i64> {
    body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_search_products_default_page() {
    let server = server().await;

    let response = server.get("/products").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["error_code"], json!(0));
    assert_eq!(item_ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(
        body["data"]["paging"],
        json!({"total": 12, "total_pages": 2, "page": 1, "page_size": 10})
    );
}

#[tokio::test]
async fn test_search_products_with_filters_json() {
    let server = server().await;
    let filters = json!([{"field": "price", "operator": "gte", "value": 100}]).to_string();

    let response = server
        .get("/products")
        .add_query_param("filters_json", filters)
        .add_query_param("page_size", 3)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["paging"]["total"], json!(5));
    assert_eq!(body["data"]["paging"]["total_pages"], json!(2));
}

#[tokio::test]
async fn test_search_products_legacy_and_sort() {
    let server = server().await;

    let response = server
        .get("/products")
        .add_query_param("name", "air")
        .await;
    assert_eq!(item_ids(&response.json::<Value>()), vec![1]);

    let response = server
        .get("/products")
        .add_query_param("sort_by", "price")
        .add_query_param("sort_order", "desc")
        .add_query_param("page_size", 2)
        .await;
    assert_eq!(item_ids(&response.json::<Value>()), vec![12, 11]);
}

#[tokio::test]
async fn test_unknown_filters_are_ignored() {
    let server = server().await;

    let response = server
        .get("/products")
        .add_query_param("rating", "5")
        .add_query_param("filters_json", "not json")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["paging"]["total"], json!(12));
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let server = server().await;

    let response = server.get("/products").add_query_param("page", 5).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert!(item_ids(&body).is_empty());
    assert_eq!(body["data"]["paging"]["total"], json!(12));
}

#[tokio::test]
async fn test_huge_page_number_is_empty() {
    let server = server().await;

    let response = server
        .get("/products")
        .add_query_param("page", i64::MAX)
        .add_query_param("page_size", 1000)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert!(item_ids(&body).is_empty());
    assert_eq!(body["data"]["paging"]["total"], json!(12));
}

#[tokio::test]
async fn test_invalid_paging_is_rejected() {
    let server = server().await;

    for (key, value) in [("page", "0"), ("page_size", "0"), ("page_size", "1001"), ("page", "abc")] {
        let response = server.get("/products").add_query_param(key, value).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{key}={value}");
        assert_eq!(response.json::<Value>()["error_code"], json!(400));
    }
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = server().await;

    server.get("/products/1").await.assert_status_ok();
    let response = server.get("/products/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_users_hides_deleted_and_password() {
    let server = server().await;

    let response = server.get("/users").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(item_ids(&body), vec![2, 1]);
    assert!(body["data"]["items"][0].get("password").is_none());
    server
        .get("/users/3")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wishlist_and_orders() {
    let server = server().await;

    let wishlist = server
        .get("/users/1/wishlist")
        .add_query_param("filters_json", r#"[{"field":"price","operator":"gt","value":50}]"#)
        .await;
    assert_eq!(item_ids(&wishlist.json::<Value>()), vec![8, 9]);

    let orders = server.get("/users/1/orders").await.json::<Value>();
    assert_eq!(item_ids(&orders), vec![2, 1]);
    assert_eq!(orders["data"]["items"][1]["product_name"], json!("Nike Air Max"));
}

#[tokio::test]
async fn test_categories_and_health() {
    let server = server().await;

    let categories = server.get("/categories").await.json::<Value>();
    assert_eq!(categories["data"][0]["name_category"], json!("Sneakers"));
    assert_eq!(categories["data"].as_array().unwrap().len(), 3);

    server.get("/health").await.assert_status_ok();
    let ready = server.get("/health/ready").await.json::<Value>();
    assert_eq!(ready["data"]["status"], json!("healthy"));
}
