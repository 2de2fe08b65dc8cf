use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::{Page, SearchRequest},
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Searches users that are not soft-deleted.
    fn search_users(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<User>, CoreError>> + Send;

    fn get_by_id(&self, user_id: i32)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

pub trait UserService: Send + Sync {
    fn search_users(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<User>, CoreError>> + Send;

    fn get_user(&self, user_id: i32) -> impl Future<Output = Result<User, CoreError>> + Send;
}
