use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Round-trip time of a trivial query, in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn readness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}

pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn readness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}
