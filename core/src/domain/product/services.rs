use tracing::info;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{
        entities::app_errors::CoreError,
        services::{Service, ensure_valid_paging},
    },
    health::ports::HealthCheckRepository,
    product::{
        entities::{Product, ShoppingHistoryItem},
        ports::{ProductRepository, ProductService},
    },
    search::{Page, SearchRequest},
    user::ports::UserRepository,
};

impl<P, U, C, HC> ProductService for Service<P, U, C, HC>
where
    P: ProductRepository,
    U: UserRepository,
    C: CategoryRepository,
    HC: HealthCheckRepository,
{
    async fn search_products(&self, request: SearchRequest) -> Result<Page<Product>, CoreError> {
        ensure_valid_paging(&request)?;

        let page = self.product_repository.search_products(request).await?;
        info!(
            total_count = page.total_count,
            page = page.page,
            "Searched products"
        );

        Ok(page)
    }

    async fn get_product(&self, product_id: i32) -> Result<Product, CoreError> {
        self.product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_wishlist(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> Result<Page<Product>, CoreError> {
        ensure_valid_paging(&request)?;

        self.product_repository.get_wishlist(user_id, request).await
    }

    async fn get_shopping_history(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> Result<Page<ShoppingHistoryItem>, CoreError> {
        ensure_valid_paging(&request)?;

        self.product_repository
            .get_shopping_history(user_id, request)
            .await
    }
}
