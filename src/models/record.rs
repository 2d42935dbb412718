//! Rows that a widget table can list and order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Typed value a record exposes for ordering by a column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Int(i64),
    Text(String),
    Time(DateTime<Utc>),
}

/// An element type that can back a widget table.
pub trait Record: Serialize + Clone + Send + Sync + 'static {
    /// Element type name; the widget key is derived from it.
    const TYPE_NAME: &'static str;

    /// Path segment used in member action links.
    const RESOURCE: &'static str;

    /// Columns the record can be ordered by.
    const SORT_KEYS: &'static [&'static str];

    fn id(&self) -> Uuid;

    /// Value of `key` for ordering, `None` when the column is not sortable.
    fn sort_value(&self, key: &str) -> Option<SortValue>;
}
