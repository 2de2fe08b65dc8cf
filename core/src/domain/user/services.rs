use tracing::info;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{
        entities::app_errors::CoreError,
        services::{Service, ensure_valid_paging},
    },
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    search::{Page, SearchRequest},
    user::{
        entities::User,
        ports::{UserRepository, UserService},
    },
};

impl<P, U, C, HC> UserService for Service<P, U, C, HC>
where
    P: ProductRepository,
    U: UserRepository,
    C: CategoryRepository,
    HC: HealthCheckRepository,
{
    async fn search_users(&self, request: SearchRequest) -> Result<Page<User>, CoreError> {
        ensure_valid_paging(&request)?;

        let page = self.user_repository.search_users(request).await?;
        info!(
            total_count = page.total_count,
            page = page.page,
            "Searched users"
        );

        Ok(page)
    }

    async fn get_user(&self, user_id: i32) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
