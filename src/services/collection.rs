//! Data-source seam for widgets and an in-memory implementation.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::pagination::WindowSpec;
use crate::models::record::Record;
use crate::models::widget_state::SortOrder;

/// An already-scoped, orderable collection a widget pages through.
pub trait DataSource {
    type Item: Serialize;

    /// Element type name the widget key is derived from.
    fn element_type(&self) -> &str;

    /// Path segment for member action links.
    fn resource(&self) -> &str;

    fn item_id(&self, item: &Self::Item) -> String;

    fn count(&self) -> Result<u64, AppError>;

    /// Fetch one ordered window. A window past the end returns an empty page.
    fn fetch(&self, window: &WindowSpec) -> Result<Vec<Self::Item>, AppError>;
}

/// Records held in memory, ordered on demand.
#[derive(Debug, Clone)]
pub struct MemoryCollection<R: Record> {
    records: Vec<R>,
}

impl<R: Record> MemoryCollection<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Narrow to the records matching `predicate`, e.g. one parent's children.
    pub fn scoped(&self, predicate: impl Fn(&R) -> bool) -> Self {
        Self {
            records: self.records.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }
}

impl<R: Record> DataSource for MemoryCollection<R> {
    type Item = R;

    fn element_type(&self) -> &str {
        R::TYPE_NAME
    }

    fn resource(&self) -> &str {
        R::RESOURCE
    }

    fn item_id(&self, item: &R) -> String {
        item.id().to_string()
    }

    fn count(&self) -> Result<u64, AppError> {
        Ok(self.records.len() as u64)
    }

    fn fetch(&self, window: &WindowSpec) -> Result<Vec<R>, AppError> {
        let key = window.sort_key.as_str();
        if !R::SORT_KEYS.contains(&key) {
            return Err(AppError::Validation(format!(
                "{} cannot be ordered by '{key}'",
                R::TYPE_NAME
            )));
        }

        let mut sorted: Vec<&R> = self.records.iter().collect();
        sorted.sort_by(|a, b| {
            let ordering = a.sort_value(key).cmp(&b.sort_value(key));
            match window.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);
        Ok(sorted.into_iter().skip(offset).take(limit).cloned().collect())
    }
}
