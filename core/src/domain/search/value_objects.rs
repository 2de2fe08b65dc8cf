use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Keys of a flat search payload that never name an entity field.
pub const RESERVED_KEYS: [&str; 3] = ["page", "page_size", "filters"];

/// Closed set of comparison operators understood by the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
    Startswith,
    Endswith,
    #[serde(alias = "in")]
    InList,
    NotIn,
    IsNull,
    IsNotNull,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Contains => "contains",
            FilterOperator::Startswith => "startswith",
            FilterOperator::Endswith => "endswith",
            FilterOperator::InList => "in_list",
            FilterOperator::NotIn => "not_in",
            FilterOperator::IsNull => "is_null",
            FilterOperator::IsNotNull => "is_not_null",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "contains" => Ok(FilterOperator::Contains),
            "startswith" => Ok(FilterOperator::Startswith),
            "endswith" => Ok(FilterOperator::Endswith),
            "in" | "in_list" => Ok(FilterOperator::InList),
            "not_in" => Ok(FilterOperator::NotIn),
            "is_null" => Ok(FilterOperator::IsNull),
            "is_not_null" => Ok(FilterOperator::IsNotNull),
            _ => Err(()),
        }
    }
}

/// Operator as it arrived on the wire.
///
/// Unknown operator names are kept instead of failing deserialization so a
/// single bad clause degrades to a no-op rather than rejecting the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestedOperator {
    Supported(FilterOperator),
    Unsupported(String),
}

impl From<String> for RequestedOperator {
    fn from(value: String) -> Self {
        match value.parse::<FilterOperator>() {
            Ok(operator) => RequestedOperator::Supported(operator),
            Err(()) => RequestedOperator::Unsupported(value),
        }
    }
}

impl From<RequestedOperator> for String {
    fn from(value: RequestedOperator) -> Self {
        match value {
            RequestedOperator::Supported(operator) => operator.as_str().to_string(),
            RequestedOperator::Unsupported(raw) => raw,
        }
    }
}

impl From<FilterOperator> for RequestedOperator {
    fn from(value: FilterOperator) -> Self {
        RequestedOperator::Supported(value)
    }
}

impl fmt::Display for RequestedOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedOperator::Supported(operator) => operator.fmt(f),
            RequestedOperator::Unsupported(raw) => f.write_str(raw),
        }
    }
}

/// A single `field <operator> value` constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: RequestedOperator,
    #[serde(default)]
    pub value: Value,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<RequestedOperator>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<&str> for SortOrder {
    /// Anything other than `desc` (case-insensitive) sorts ascending.
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Per-call search transport: paging, structured filters, legacy flat
/// filters and an optional sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Backward-compatible `field=value` pairs matched by name.
    #[serde(flatten)]
    pub legacy: BTreeMap<String, Value>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            filters: Vec::new(),
            sort_by: None,
            sort_order: SortOrder::Asc,
            legacy: BTreeMap::new(),
        }
    }
}

impl SearchRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_legacy(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.legacy.insert(key.into(), value.into());
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = order;
        self
    }

    /// Removes a legacy key that a call site handles itself (e.g. through a join).
    pub fn take_legacy(&mut self, key: &str) -> Option<Value> {
        self.legacy.remove(key)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be greater than or equal to 1".to_string());
        }
        if self.page_size < 1 {
            return Err("page_size must be greater than or equal to 1".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One slice of an ordered result set together with the unsliced count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, page: u64, page_size: u64) -> Self {
        Self {
            items,
            total_count,
            page,
            page_size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
