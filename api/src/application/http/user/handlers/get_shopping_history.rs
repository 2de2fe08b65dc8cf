use axum::extract::{Path, State};
use storefront_core::domain::product::{entities::ShoppingHistoryItem, ports::ProductService};

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
    path = "/{user_id}/orders",
    tag = "user",
    summary = "Get shopping history",
    description = "The user's orders, newest first. Filters apply to order columns such as `status` or `total_price`.",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        SearchParams
    ),
    responses(
        (status = 200, body = PagedData<ShoppingHistoryItem>),
        (status = 400, description = "Invalid paging")
    ),
)]
pub async fn get_shopping_history(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    SearchQuery(request): SearchQuery,
) -> Result<Response<PagedData<ShoppingHistoryItem>>, ApiError> {
    let page = state
        .service
        .get_shopping_history(user_id, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PagedData::from(page)))
}
