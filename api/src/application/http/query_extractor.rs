use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;
use storefront_core::domain::search::SearchRequest;
use utoipa::IntoParams;
use validator::Validate;

use super::query_params::QueryParams;
use crate::application::http::server::api_entities::api_error::ApiError;

/// Query parameters shared by every paginated search endpoint.
///
/// Keys not listed here are treated as legacy `field=value` filters.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// 1-based page number, defaults to 1
    pub page: Option<i64>,
    /// Defaults to 10, at most 1000
    pub page_size: Option<i64>,
    /// JSON list of `{"field", "operator", "value"}` objects
    pub filters_json: Option<String>,
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

/// Upper bound on `page_size` accepted over HTTP.
pub const MAX_PAGE_SIZE: i64 = 1000;

#[derive(Debug, Validate)]
pub struct PagingValidator {
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: i64,

    #[validate(range(
        min = 1,
        max = MAX_PAGE_SIZE,
        message = "page_size must be between 1 and 1000"
    ))]
    pub page_size: i64,
}

/// Extracts a validated [`SearchRequest`] from the query string.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     State(state): State<AppState>,
///     SearchQuery(request): SearchQuery,
/// ) -> Result<Response<PagedData<Product>>, ApiError> {
///     // hand `request` to a search service
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery(pub SearchRequest);

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))?;

        let query_params = QueryParams::from_query_map(&query_map);
        let (page, page_size) = query_params.paging.parse().map_err(ApiError::BadRequest)?;

        PagingValidator { page, page_size }
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(SearchQuery(
            query_params.into_search_request(page as u64, page_size as u64),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_validator() {
        assert!(PagingValidator { page: 1, page_size: 10 }.validate().is_ok());
        assert!(PagingValidator { page: 0, page_size: 10 }.validate().is_err());
        assert!(PagingValidator { page: 1, page_size: 0 }.validate().is_err());
        assert!(PagingValidator { page: 1, page_size: MAX_PAGE_SIZE }.validate().is_ok());
        assert!(PagingValidator { page: 1, page_size: MAX_PAGE_SIZE + 1 }.validate().is_err());
        assert!(PagingValidator { page: i64::MAX, page_size: MAX_PAGE_SIZE }.validate().is_ok());
    }
}
