use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::{Deserialize, Serialize};
use storefront_core::domain::search::Page;
use utoipa::ToSchema;

/// Storefront response envelope. `error_code` is 0 on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub error_code: i32,
    pub message: String,
    pub description: String,
    pub data: Option<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Paging {
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
    pub page_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PagedData<T> {
    pub items: Vec<T>,
    pub paging: Paging,
}

impl<T> From<Page<T>> for PagedData<T> {
    fn from(page: Page<T>) -> Self {
        let paging = Paging {
            total: page.total_count,
            total_pages: page.total_pages(),
            page: page.page,
            page_size: page.page_size,
        };

        PagedData {
            items: page.items,
            paging,
        }
    }
}

pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (
                StatusCode::OK,
                Json(ApiResponse {
                    error_code: 0,
                    message: "Success".to_string(),
                    description: "Request processed successfully".to_string(),
                    data: Some(data),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_data_from_page() {
        let data = PagedData::from(Page::new(vec!["a", "b", "c"], 25, 1, 3));

        assert_eq!(data.items.len(), 3);
        assert_eq!(
            data.paging,
            Paging {
                total: 25,
                total_pages: 9,
                page: 1,
                page_size: 3,
            }
        );
    }
}
