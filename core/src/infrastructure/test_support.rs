//! In-memory SQLite fixtures shared by the repository and engine tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema,
};

use crate::entity::{categories, orders, products, size_product, sizes, users, wishlists};

pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let statements = [
        schema.create_table_from_entity(categories::Entity),
        schema.create_table_from_entity(products::Entity),
        schema.create_table_from_entity(sizes::Entity),
        schema.create_table_from_entity(size_product::Entity),
        schema.create_table_from_entity(users::Entity),
        schema.create_table_from_entity(wishlists::Entity),
        schema.create_table_from_entity(orders::Entity),
    ];
    for statement in &statements {
        db.execute(backend.build(statement)).await.unwrap();
    }

    db
}

/// `2024-01-01 00:00:00` shifted by `hours`.
pub fn timestamp(hours: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap()
        + Duration::hours(hours)
}

pub fn product(id: i32, name: &str, price: f64) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        brand_id: Set(1),
        price: Set(price),
        main_image_url: Set(None),
        stock: Set(10),
        category_id: Set(1),
        collab_status: Set(0),
        create_date: Set(timestamp(id as i64)),
        update_date: Set(None),
    }
}

pub fn user(id: i32, username: &str, email: &str) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(id),
        username: Set(Some(username.to_string())),
        password: Set(Some("$argon2id$hash".to_string())),
        email: Set(Some(email.to_string())),
        full_name: Set(None),
        phone: Set(None),
        address: Set(None),
        avatar: Set(None),
        is_active: Set(true),
        role: Set("customer".to_string()),
        is_deleted: Set(false),
        create_date: Set(timestamp(id as i64)),
        update_date: Set(None),
    }
}

pub fn order(id: i32, user_id: i32, product_id: i32, total_price: f64, status: &str) -> orders::ActiveModel {
    orders::ActiveModel {
        id: Set(id),
        product_id: Set(product_id),
        user_id: Set(user_id),
        quantity: Set(1),
        total_price: Set(total_price),
        status: Set(status.to_string()),
        created_at: Set(timestamp(id as i64)),
    }
}

pub async fn insert_products(db: &DatabaseConnection, models: Vec<products::ActiveModel>) {
    products::Entity::insert_many(models).exec(db).await.unwrap();
}

pub async fn insert_users(db: &DatabaseConnection, models: Vec<users::ActiveModel>) {
    users::Entity::insert_many(models).exec(db).await.unwrap();
}

pub async fn insert_orders(db: &DatabaseConnection, models: Vec<orders::ActiveModel>) {
    orders::Entity::insert_many(models).exec(db).await.unwrap();
}

pub async fn insert_categories(db: &DatabaseConnection, names: &[&str]) {
    let models = names.iter().enumerate().map(|(index, name)| categories::ActiveModel {
        id: Set(index as i32 + 1),
        name_category: Set(name.to_string()),
    });
    categories::Entity::insert_many(models).exec(db).await.unwrap();
}

pub async fn insert_wishlist(db: &DatabaseConnection, user_id: i32, product_ids: &[i32]) {
    let models = product_ids.iter().map(|product_id| wishlists::ActiveModel {
        product_id: Set(*product_id),
        user_id: Set(user_id),
        ..Default::default()
    });
    wishlists::Entity::insert_many(models).exec(db).await.unwrap();
}

/// Sizes get ids in the order given; `links` are `(product_id, size_id)`.
pub async fn insert_sizes(db: &DatabaseConnection, names: &[&str], links: &[(i32, i32)]) {
    let models = names.iter().enumerate().map(|(index, name)| sizes::ActiveModel {
        id: Set(index as i32 + 1),
        size_name: Set(name.to_string()),
    });
    sizes::Entity::insert_many(models).exec(db).await.unwrap();

    let links = links.iter().map(|(product_id, size_id)| size_product::ActiveModel {
        product_id: Set(*product_id),
        size_id: Set(*size_id),
        ..Default::default()
    });
    size_product::Entity::insert_many(links).exec(db).await.unwrap();
}
