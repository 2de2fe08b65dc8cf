use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sizes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub size_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::size_product::Entity")]
    SizeProduct,
}

impl Related<super::size_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizeProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
