use sea_orm::{EntityTrait, Order};
use tracing::warn;

use super::field_registry::FieldRegistry;
use crate::domain::search::{SearchRequest, SortOrder};

impl From<SortOrder> for Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Column and direction requested by `sort_by`/`sort_order`.
///
/// Returns `None` when no sort was asked for or when `sort_by` is not a
/// registered field, in which case the caller keeps its default order.
pub fn resolve_sort<E: EntityTrait>(
    registry: &FieldRegistry<E>,
    request: &SearchRequest,
) -> Option<(E::Column, Order)> {
    let sort_by = request.sort_by.as_deref().map(str::trim)?;
    if sort_by.is_empty() {
        return None;
    }

    match registry.resolve(sort_by) {
        Some(field) => Some((field.column, request.sort_order.into())),
        None => {
            warn!(sort_by = %sort_by, "Ignoring sort on unknown field");
            None
        }
    }
}
