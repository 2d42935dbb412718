//! Per-widget sort/order/page state and its compact query-string token.
//!
//! A token has the form `{sort_key}-{order}-{page}` and lives under a single
//! query parameter named after the widget's element type, so several widgets
//! can share one URL without clobbering each other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::query_params::QueryParams;

/// Separator between token fields.
const TOKEN_SEPARATOR: char = '-';

/// Sort key used when a token is absent or has no sort field.
pub const DEFAULT_SORT_KEY: &str = "created_at";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction, used by column header toggle links.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Lenient parse: anything other than `asc`/`desc` yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query-parameter name isolating one widget's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WidgetKey(String);

impl WidgetKey {
    /// Derive the key from the element type name, e.g. `Course` -> `course-w`.
    ///
    /// Two widgets over the same element type resolve to the same key and
    /// therefore share state.
    pub fn for_type(element_type: &str) -> Self {
        Self(format!("{element_type}-w").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded pagination state of one widget for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub sort_key: String,
    pub order: SortOrder,
    pub page: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            sort_key: DEFAULT_SORT_KEY.to_string(),
            order: SortOrder::Desc,
            page: 1,
        }
    }
}

/// Sparse patch applied on top of a [`PaginationState`] when encoding a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateOverrides {
    pub sort_key: Option<String>,
    pub order: Option<SortOrder>,
    pub page: Option<u64>,
}

impl StateOverrides {
    /// Same sort, different page.
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

impl PaginationState {
    /// Decode the widget's token from the request parameters.
    ///
    /// Never fails: a missing key yields the default state and every missing
    /// or unreadable field falls back to its own default.
    pub fn decode(params: &QueryParams, key: &WidgetKey) -> Self {
        match params.get(key.as_str()) {
            Some(token) => Self::from_token(token),
            None => Self::default(),
        }
    }

    /// Decode a raw token string.
    pub fn from_token(token: &str) -> Self {
        let defaults = Self::default();
        let mut fields = token.split(TOKEN_SEPARATOR);

        let sort_key = match fields.next() {
            Some(field) if !field.is_empty() => field.to_string(),
            _ => defaults.sort_key,
        };
        let order = match fields.next() {
            Some(raw) => SortOrder::parse(raw).unwrap_or_else(|| {
                tracing::debug!(token = %token, "Unrecognized sort order in widget token");
                defaults.order
            }),
            None => defaults.order,
        };
        let page = match fields.next() {
            Some(raw) => parse_page(raw).unwrap_or_else(|| {
                tracing::debug!(token = %token, "Unreadable page in widget token");
                defaults.page
            }),
            None => defaults.page,
        };

        Self {
            sort_key,
            order,
            page,
        }
    }

    /// Encode this state with `overrides` applied, without mutating `self`.
    pub fn encode(&self, overrides: &StateOverrides) -> String {
        let sort_key = overrides.sort_key.as_deref().unwrap_or(&self.sort_key);
        let order = overrides.order.unwrap_or(self.order);
        let page = overrides.page.unwrap_or(self.page);
        format!("{sort_key}{TOKEN_SEPARATOR}{order}{TOKEN_SEPARATOR}{page}")
    }

    /// Token that re-sorts by `sort_key` in the opposite direction of the
    /// current order and returns to the first page.
    pub fn toggle_sort(&self, sort_key: &str) -> String {
        self.encode(&StateOverrides {
            sort_key: Some(sort_key.to_string()),
            order: Some(self.order.toggled()),
            page: Some(1),
        })
    }

    /// Token for the same sort on another page.
    pub fn with_page(&self, page: u64) -> String {
        self.encode(&StateOverrides::page(page))
    }
}

/// Pages are positive integers; anything else is treated as absent.
fn parse_page(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|page| *page >= 1)
}
