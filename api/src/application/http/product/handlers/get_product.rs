use axum::extract::{Path, State};
use storefront_core::domain::product::{entities::Product, ports::ProductService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get product",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Product not found")
    ),
)]
pub async fn get_product(
    Path(product_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .get_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
