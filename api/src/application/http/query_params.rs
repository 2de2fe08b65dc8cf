use std::collections::HashMap;

use serde_json::Value;
use storefront_core::domain::search::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Filter, SearchRequest, SortOrder,
};
use tracing::warn;

/// Query keys with a meaning of their own. Every other key is handed to the
/// search engine as a legacy `field=value` filter.
const PAGE: &str = "page";
const PAGE_SIZE: &str = "page_size";
const FILTERS_JSON: &str = "filters_json";
const SORT_BY: &str = "sort_by";
const SORT_ORDER: &str = "sort_order";

/// Paging values as they appeared in the query string, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPaging {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Parsed search query string.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub paging: RawPaging,
    pub filters: Vec<Filter>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub legacy: HashMap<String, String>,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles:
    /// - page=2&page_size=20
    /// - filters_json=[{"field":"price","operator":"gte","value":100}]
    /// - sort_by=price&sort_order=desc
    /// - any other key as a legacy filter, e.g. category_id=3
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut legacy = HashMap::new();
        let mut filters = Vec::new();
        let mut sort_by = None;
        let mut sort_order = SortOrder::default();

        for (key, value) in query_map {
            match key.as_str() {
                PAGE | PAGE_SIZE => {}
                FILTERS_JSON => filters = parse_filters_json(value),
                SORT_BY => {
                    if !value.trim().is_empty() {
                        sort_by = Some(value.trim().to_string());
                    }
                }
                SORT_ORDER => sort_order = SortOrder::from(value.as_str()),
                _ => {
                    legacy.insert(key.clone(), value.clone());
                }
            }
        }

        Self {
            paging: RawPaging {
                page: query_map.get(PAGE).cloned(),
                page_size: query_map.get(PAGE_SIZE).cloned(),
            },
            filters,
            sort_by,
            sort_order,
            legacy,
        }
    }

    /// Builds the engine request with the already validated paging.
    pub fn into_search_request(self, page: u64, page_size: u64) -> SearchRequest {
        SearchRequest {
            page,
            page_size,
            filters: self.filters,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            legacy: self
                .legacy
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        }
    }
}

impl RawPaging {
    /// Missing values fall back to the defaults; present ones must be integers.
    pub fn parse(&self) -> Result<(i64, i64), String> {
        let page = parse_number(PAGE, self.page.as_deref(), DEFAULT_PAGE)?;
        let page_size = parse_number(PAGE_SIZE, self.page_size.as_deref(), DEFAULT_PAGE_SIZE)?;
        Ok((page, page_size))
    }
}

fn parse_number(name: &str, raw: Option<&str>, default: u64) -> Result<i64, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default as i64),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| format!("{name} must be an integer")),
    }
}

/// A malformed document or anything but a list yields no filters.
fn parse_filters_json(raw: &str) -> Vec<Filter> {
    match serde_json::from_str::<Vec<Filter>>(raw) {
        Ok(filters) => filters,
        Err(e) => {
            warn!("Ignoring malformed filters_json: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_core::domain::search::{FilterOperator, RequestedOperator};

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_paging_and_sort() {
        let params = QueryParams::from_query_map(&map(&[
            ("page", "2"),
            ("page_size", "20"),
            ("sort_by", "price"),
            ("sort_order", "DESC"),
        ]));

        assert_eq!(params.paging.parse(), Ok((2, 20)));
        assert_eq!(params.sort_by.as_deref(), Some("price"));
        assert_eq!(params.sort_order, SortOrder::Desc);
        assert!(params.legacy.is_empty());
    }

    #[test]
    fn test_paging_defaults_and_errors() {
        let params = QueryParams::from_query_map(&HashMap::new());
        assert_eq!(params.paging.parse(), Ok((1, 10)));

        let params = QueryParams::from_query_map(&map(&[("page", "abc")]));
        assert!(params.paging.parse().is_err());

        let params = QueryParams::from_query_map(&map(&[("page", "0"), ("page_size", "-1")]));
        assert_eq!(params.paging.parse(), Ok((0, -1)));
    }

    #[test]
    fn test_filters_json() {
        let params = QueryParams::from_query_map(&map(&[(
            "filters_json",
            r#"[{"field":"price","operator":"gte","value":100},{"field":"name","operator":"like","value":"x"}]"#,
        )]));

        assert_eq!(params.filters.len(), 2);
        assert_eq!(params.filters[0].operator, FilterOperator::Gte.into());
        assert_eq!(params.filters[0].value, json!(100));
        assert_eq!(
            params.filters[1].operator,
            RequestedOperator::Unsupported("like".to_string())
        );
    }

    #[test]
    fn test_malformed_filters_json_is_ignored() {
        let not_json = QueryParams::from_query_map(&map(&[("filters_json", "{oops")]));
        let not_list =
            QueryParams::from_query_map(&map(&[("filters_json", r#"{"field":"price"}"#)]));

        assert!(not_json.filters.is_empty());
        assert!(not_list.filters.is_empty());
    }

    #[test]
    fn test_unknown_keys_become_legacy_filters() {
        let params = QueryParams::from_query_map(&map(&[
            ("category_id", "3"),
            ("size_type", "42"),
            ("page", "1"),
        ]));

        let request = params.into_search_request(1, 10);
        assert_eq!(request.legacy.len(), 2);
        assert_eq!(request.legacy["category_id"], json!("3"));
        assert_eq!(request.legacy["size_type"], json!("42"));
    }
}
