use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storefront_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;

use super::response::ApiResponse;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad request",
            ApiError::NotFound(_) => "Not found",
            ApiError::InternalServerError(_) => "Internal server error",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::InvalidPagination(message) => ApiError::BadRequest(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = ApiResponse::<()> {
            error_code: i32::from(status.as_u16()),
            message: self.message().to_string(),
            description: self.to_string(),
            data: None,
        };

        (status, Json(body)).into_response()
    }
}
