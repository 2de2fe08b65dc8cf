use axum::extract::{Path, State};
use storefront_core::domain::product::{entities::Product, ports::ProductService};

use crate::application::http::{
    query_extractor::{SearchParams, SearchQuery},
    server::{
        api_entities::{
            api_error::ApiError,
            response::{PagedData, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{user_id}/wishlist",
    tag = "user",
    summary = "Get wishlist",
    description = "Products on the user's wishlist, searchable with the same parameters as the catalog.",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        SearchParams
    ),
    responses(
        (status = 200, body = PagedData<Product>),
        (status = 400, description = "Invalid paging")
    ),
)]
pub async fn get_wishlist(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    SearchQuery(request): SearchQuery,
) -> Result<Response<PagedData<Product>>, ApiError> {
    let page = state
        .service
        .get_wishlist(user_id, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PagedData::from(page)))
}
