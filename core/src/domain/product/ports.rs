use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::entities::{Product, ShoppingHistoryItem},
    search::{Page, SearchRequest},
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Catalog search. Besides the generic filters, the legacy `size_type`
    /// key restricts products to those offered in that size.
    fn search_products(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: i32,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_wishlist(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn get_shopping_history(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<ShoppingHistoryItem>, CoreError>> + Send;
}

pub trait ProductService: Send + Sync {
    fn search_products(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: i32,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_wishlist(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn get_shopping_history(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Page<ShoppingHistoryItem>, CoreError>> + Send;
}
