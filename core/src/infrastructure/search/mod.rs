//! Dynamic filter & pagination engine.
//!
//! Turns a [`SearchRequest`](crate::domain::search::SearchRequest) into a
//! narrowed, ordered and sliced `SeaORM` query. Field names coming from the
//! request are only ever resolved through an explicit [`FieldRegistry`], so
//! callers decide which columns are searchable.

pub mod composer;
pub mod field_registry;
pub mod filter;
pub mod paginator;
pub mod sort;

use sea_orm::DbErr;
use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

pub use composer::apply_dynamic_filters;
pub use field_registry::{Field, FieldKind, FieldRegistry};
pub use filter::{apply_filter, filter_expression};
pub use paginator::paginate;
pub use sort::resolve_sort;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("page_size must be at least 1")]
    EmptyPage,

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl From<SearchError> for CoreError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::EmptyPage => CoreError::InvalidPagination(error.to_string()),
            SearchError::Database(_) => CoreError::InternalServerError,
        }
    }
}
