use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Internal server error")]
    InternalServerError,
}
