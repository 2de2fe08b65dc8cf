use sea_orm::{EntityTrait, QueryFilter, sea_query::SimpleExpr};
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    field_registry::{Field, FieldRegistry},
    filter::filter_expression,
};
use crate::domain::search::{FilterOperator, RESERVED_KEYS, SearchRequest};

/// Folds every filter of `request` onto `query`.
///
/// Structured filters are applied first, in order, followed by the legacy
/// `field=value` pairs. All predicates are ANDed together. Names that the
/// registry does not know contribute nothing.
pub fn apply_dynamic_filters<E, Q>(query: Q, registry: &FieldRegistry<E>, request: &SearchRequest) -> Q
where
    E: EntityTrait,
    Q: QueryFilter,
{
    let mut query = query;

    for filter in &request.filters {
        let Some(field) = registry.resolve(&filter.field) else {
            warn!(field = %filter.field, "Ignoring filter on unknown field");
            continue;
        };

        if let Some(expression) = filter_expression(field, &filter.operator, &filter.value) {
            debug!(field = %filter.field, operator = %filter.operator, "Applied filter");
            query = query.filter(expression);
        }
    }

    for (key, value) in &request.legacy {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let Some(field) = registry.resolve(key) else {
            debug!(field = %key, "Ignoring legacy filter on unknown field");
            continue;
        };

        if let Some(expression) = legacy_expression(field, value) {
            debug!(field = %key, "Applied legacy filter");
            query = query.filter(expression);
        }
    }

    query
}

/// Text fields match by case-insensitive substring, everything else by
/// equality. Missing or blank values are skipped.
fn legacy_expression<E: EntityTrait>(field: &Field<E>, value: &Value) -> Option<SimpleExpr> {
    if is_blank(value) {
        return None;
    }

    let operator = if field.kind.is_text() {
        FilterOperator::Contains
    } else {
        FilterOperator::Eq
    };
    filter_expression(field, &operator.into(), value)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};
    use serde_json::json;

    use super::*;
    use crate::domain::search::Filter;
    use crate::entity::products::{Column, Entity};
    use crate::infrastructure::search::FieldKind;

    fn registry() -> FieldRegistry<Entity> {
        FieldRegistry::new()
            .field(Column::Name, FieldKind::Text)
            .field(Column::Price, FieldKind::Float)
            .field(Column::CategoryId, FieldKind::Integer)
    }

    fn sql(request: &SearchRequest) -> String {
        apply_dynamic_filters(Entity::find(), &registry(), request)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_empty_request_leaves_query_untouched() {
        let base = Entity::find().build(DbBackend::Postgres).to_string();

        assert_eq!(sql(&SearchRequest::default()), base);
    }

    #[test]
    fn test_unknown_fields_and_reserved_keys_are_ignored() {
        let base = Entity::find().build(DbBackend::Postgres).to_string();
        let request = SearchRequest::default()
            .with_filter(Filter::new("password", FilterOperator::Eq, "secret"))
            .with_legacy("__class__", "x")
            .with_legacy("page", 3);

        assert_eq!(sql(&request), base);
    }

    #[test]
    fn test_legacy_blank_values_are_skipped() {
        let base = Entity::find().build(DbBackend::Postgres).to_string();
        let request = SearchRequest::default()
            .with_legacy("name", "   ")
            .with_legacy("price", Value::Null);

        assert_eq!(sql(&request), base);
    }

    #[test]
    fn test_structured_filters_precede_legacy_filters() {
        let request = SearchRequest::default()
            .with_filter(Filter::new("price", FilterOperator::Gte, 100))
            .with_legacy("category_id", "3");

        let sql = sql(&request);
        let price = sql.find(r#""products"."price" >= 100"#).unwrap();
        let category = sql.find(r#""products"."category_id" = 3"#).unwrap();
        assert!(price < category, "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
    }

    #[test]
    fn test_legacy_text_field_uses_substring_match() {
        let request = SearchRequest::default().with_legacy("name", json!("Air"));

        let sql = sql(&request);
        assert!(sql.contains("LIKE '%air%'"), "{sql}");
    }
}
