use crate::domain::{
    category::{
        entities::Category,
        ports::{CategoryRepository, CategoryService},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    user::ports::UserRepository,
};

impl<P, U, C, HC> CategoryService for Service<P, U, C, HC>
where
    P: ProductRepository,
    U: UserRepository,
    C: CategoryRepository,
    HC: HealthCheckRepository,
{
    async fn get_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.category_repository.get_all().await
    }
}
