use axum::extract::State;
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
    path = "",
    tag = "product",
    summary = "Search products",
    description = "Paginated product search. Besides `filters_json`, any product column can be passed as a plain query parameter (substring match on text, equality otherwise), and `size_type` restricts results to one size.",
    params(SearchParams),
    responses(
        (status = 200, body = PagedData<Product>),
        (status = 400, description = "Invalid paging")
    ),
)]
pub async fn search_products(
    State(state): State<AppState>,
    SearchQuery(request): SearchQuery,
) -> Result<Response<PagedData<Product>>, ApiError> {
    let page = state
        .service
        .search_products(request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PagedData::from(page)))
}
