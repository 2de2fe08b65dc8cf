use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("admin") {
            UserRole::Admin
        } else {
            UserRole::Customer
        }
    }
}

/// A storefront account. The password hash never leaves the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub role: UserRole,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
}
