use sea_orm::DatabaseConnection;

use crate::domain::common::{StorefrontConfig, services::Service};
use crate::infrastructure::{
    category::repositories::category_repository::PostgresCategoryRepository,
    db::postgres::{Postgres, PostgresConfig},
    health::health_repository::PostgresHealthCheckRepository,
    product::repositories::product_repository::PostgresProductRepository,
    user::repositories::user_repository::PostgresUserRepository,
};

pub type StorefrontService = Service<
    PostgresProductRepository,
    PostgresUserRepository,
    PostgresCategoryRepository,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, applies pending migrations and wires the service.
pub async fn create_service(config: StorefrontConfig) -> Result<StorefrontService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    Ok(service_from_connection(postgres.get_db()))
}

pub fn service_from_connection(db: DatabaseConnection) -> StorefrontService {
    Service::new(
        PostgresProductRepository::new(db.clone()),
        PostgresUserRepository::new(db.clone()),
        PostgresCategoryRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    )
}
