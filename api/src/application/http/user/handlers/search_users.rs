use axum::extract::State;
use storefront_core::domain::user::{entities::User, ports::UserService};

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
    tag = "user",
    summary = "Search users",
    description = "Paginated search over users that are not deleted, newest first unless `sort_by` says otherwise.",
    params(SearchParams),
    responses(
        (status = 200, body = PagedData<User>),
        (status = 400, description = "Invalid paging")
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    SearchQuery(request): SearchQuery,
) -> Result<Response<PagedData<User>>, ApiError> {
    let page = state
        .service
        .search_users(request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PagedData::from(page)))
}
