//! Course model listed by the course widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::record::{Record, SortValue};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub credits: i64,
    pub created_at: DateTime<Utc>,
}

impl Record for Course {
    const TYPE_NAME: &'static str = "Course";
    const RESOURCE: &'static str = "courses";
    const SORT_KEYS: &'static [&'static str] = &["id", "title", "credits", "created_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "id" => Some(SortValue::Text(self.id.to_string())),
            "title" => Some(SortValue::Text(self.title.clone())),
            "credits" => Some(SortValue::Int(self.credits)),
            "created_at" => Some(SortValue::Time(self.created_at)),
            _ => None,
        }
    }
}
