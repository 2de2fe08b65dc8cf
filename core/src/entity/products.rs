use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub brand_id: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub main_image_url: Option<String>,
    pub stock: i32,
    pub category_id: i32,
    pub collab_status: i32,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlists::Entity")]
    Wishlist,
    #[sea_orm(has_many = "super::size_product::Entity")]
    SizeProduct,
    #[sea_orm(has_many = "super::orders::Entity")]
    Order,
}

impl Related<super::wishlists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::size_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizeProduct.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
