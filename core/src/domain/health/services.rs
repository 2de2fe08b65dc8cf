use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    product::ports::ProductRepository,
    user::ports::UserRepository,
};

impl<P, U, C, HC> HealthCheckService for Service<P, U, C, HC>
where
    P: ProductRepository,
    U: UserRepository,
    C: CategoryRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
