use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub brand_id: i32,
    pub price: f64,
    pub main_image_url: Option<String>,
    pub stock: i32,
    pub category_id: i32,
    pub collab_status: i32,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
}

/// One order of a user's shopping history, with the ordered product's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingHistoryItem {
    pub id: i32,
    pub product_id: i32,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
