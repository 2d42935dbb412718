//! Request query-parameter mapping and link targets derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::widget_state::WidgetKey;

/// Read-only view of the current request's query parameters.
///
/// Ordered so that generated hrefs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Copy of these parameters with only the widget's key replaced.
    pub fn with_token(&self, key: &WidgetKey, token: String) -> Self {
        let mut merged = self.0.clone();
        merged.insert(key.as_str().to_string(), token);
        Self(merged)
    }

    /// Form-encoded query string including the leading `?`.
    pub fn to_query_string(&self) -> String {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish();
        format!("?{encoded}")
    }
}

/// A rendered link: label plus the full parameter set it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub params: QueryParams,
    pub href: String,
}

/// Turns a label and a target parameter set into a link.
pub trait LinkRenderer {
    fn render(&self, label: &str, params: QueryParams) -> Link;
}

/// Renders links as relative query-string hrefs on the current path.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryLinkRenderer;

impl LinkRenderer for QueryLinkRenderer {
    fn render(&self, label: &str, params: QueryParams) -> Link {
        Link {
            label: label.to_string(),
            href: params.to_query_string(),
            params,
        }
    }
}
