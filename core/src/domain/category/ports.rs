use std::future::Future;

use crate::domain::{category::entities::Category, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}

pub trait CategoryService: Send + Sync {
    fn get_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}
