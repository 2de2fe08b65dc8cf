use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::domain::{
    category::{entities::Category, ports::CategoryRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::categories::{Column as CategoryColumn, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, CoreError> {
        let categories = CategoryEntity::find()
            .order_by_asc(CategoryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch categories: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Category::from)
            .collect::<Vec<Category>>();

        Ok(categories)
    }
}
