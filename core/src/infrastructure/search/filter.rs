//! Single-predicate applicator over the closed operator set.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, Value as DbValue,
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
};
use serde_json::Value;
use tracing::warn;

use super::field_registry::{Field, FieldKind};
use crate::domain::search::{FilterOperator, RequestedOperator};

const LIKE_ESCAPE: char = '\\';

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Narrows `query` with one predicate. The query is never executed here.
///
/// Anything that cannot be turned into a predicate (unsupported operator,
/// value of the wrong type, non-list value for a list operator) leaves the
/// query untouched.
pub fn apply_filter<E, Q>(
    query: Q,
    field: &Field<E>,
    operator: &RequestedOperator,
    value: &Value,
) -> Q
where
    E: EntityTrait,
    Q: QueryFilter,
{
    match filter_expression(field, operator, value) {
        Some(expression) => query.filter(expression),
        None => query,
    }
}

/// Builds the predicate for `field <operator> value`, or `None` when the
/// clause has to be dropped.
pub fn filter_expression<E: EntityTrait>(
    field: &Field<E>,
    operator: &RequestedOperator,
    value: &Value,
) -> Option<SimpleExpr> {
    let operator = match operator {
        RequestedOperator::Supported(operator) => *operator,
        RequestedOperator::Unsupported(raw) => {
            warn!(
                field = field.name(),
                operator = %raw,
                "Unsupported filter operator, skipping filter"
            );
            return None;
        }
    };

    let column = field.column;
    match operator {
        FilterOperator::Eq => coerce(field, operator, value).map(|v| column.eq(v)),
        FilterOperator::Ne => coerce(field, operator, value).map(|v| column.ne(v)),
        FilterOperator::Lt => coerce(field, operator, value).map(|v| column.lt(v)),
        FilterOperator::Lte => coerce(field, operator, value).map(|v| column.lte(v)),
        FilterOperator::Gt => coerce(field, operator, value).map(|v| column.gt(v)),
        FilterOperator::Gte => coerce(field, operator, value).map(|v| column.gte(v)),
        FilterOperator::Contains => like_fragment(field, operator, value)
            .map(|fragment| insensitive_like(field, format!("%{fragment}%"))),
        FilterOperator::Startswith => like_fragment(field, operator, value)
            .map(|fragment| insensitive_like(field, format!("{fragment}%"))),
        FilterOperator::Endswith => like_fragment(field, operator, value)
            .map(|fragment| insensitive_like(field, format!("%{fragment}"))),
        FilterOperator::InList => coerce_list(field, operator, value).map(|v| column.is_in(v)),
        FilterOperator::NotIn => {
            coerce_list(field, operator, value).map(|v| column.is_not_in(v))
        }
        FilterOperator::IsNull => Some(column.is_null()),
        FilterOperator::IsNotNull => Some(column.is_not_null()),
    }
}

/// `LOWER(column) LIKE lower(pattern) ESCAPE '\'`. Non-text columns are cast
/// to text first so that e.g. `price contains "120"` works.
fn insensitive_like<E: EntityTrait>(field: &Field<E>, pattern: String) -> SimpleExpr {
    let column = Expr::col((E::default(), field.column));
    let target: SimpleExpr = if field.kind.is_text() {
        column.into()
    } else {
        column.cast_as(Alias::new("TEXT"))
    };

    Expr::expr(Func::lower(target)).like(LikeExpr::new(pattern.to_lowercase()).escape(LIKE_ESCAPE))
}

fn like_fragment<E: EntityTrait>(
    field: &Field<E>,
    operator: FilterOperator,
    value: &Value,
) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => {
            warn!(
                field = field.name(),
                operator = %operator,
                value = %value,
                "Pattern filter needs a scalar value, skipping filter"
            );
            return None;
        }
    };
    Some(escape_like(&raw))
}

pub(crate) fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn coerce<E: EntityTrait>(
    field: &Field<E>,
    operator: FilterOperator,
    value: &Value,
) -> Option<DbValue> {
    let coerced = coerce_scalar(field.kind, value);
    if coerced.is_none() {
        warn!(
            field = field.name(),
            operator = %operator,
            value = %value,
            kind = ?field.kind,
            "Filter value does not match field type, skipping filter"
        );
    }
    coerced
}

fn coerce_list<E: EntityTrait>(
    field: &Field<E>,
    operator: FilterOperator,
    value: &Value,
) -> Option<Vec<DbValue>> {
    let Value::Array(values) = value else {
        warn!(
            field = field.name(),
            operator = %operator,
            value = %value,
            "List operator needs a list value, skipping filter"
        );
        return None;
    };

    values
        .iter()
        .map(|item| coerce(field, operator, item))
        .collect()
}

pub(crate) fn coerce_scalar(kind: FieldKind, value: &Value) -> Option<DbValue> {
    match (kind, value) {
        (FieldKind::Text, Value::String(s)) => Some(s.clone().into()),
        (FieldKind::Text, Value::Number(n)) => Some(n.to_string().into()),
        (FieldKind::Text, Value::Bool(b)) => Some(b.to_string().into()),
        (FieldKind::Integer, Value::Number(n)) => n.as_i64().map(Into::into),
        (FieldKind::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(Into::into),
        (FieldKind::Float, Value::Number(n)) => n.as_f64().map(Into::into),
        (FieldKind::Float, Value::String(s)) => s.trim().parse::<f64>().ok().map(Into::into),
        (FieldKind::Boolean, Value::Bool(b)) => Some((*b).into()),
        (FieldKind::Boolean, Value::Number(n)) => match n.as_i64() {
            Some(0) => Some(false.into()),
            Some(1) => Some(true.into()),
            _ => None,
        },
        (FieldKind::Boolean, Value::String(s)) => parse_bool(s).map(Into::into),
        (FieldKind::DateTime, Value::String(s)) => parse_datetime(s).map(Into::into),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
