use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::record::{Record, SortValue};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Student {
    const TYPE_NAME: &'static str = "Student";
    const RESOURCE: &'static str = "students";
    const SORT_KEYS: &'static [&'static str] = &["id", "name", "email", "created_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "id" => Some(SortValue::Text(self.id.to_string())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "email" => Some(SortValue::Text(self.email.clone())),
            "created_at" => Some(SortValue::Time(self.created_at)),
            _ => None,
        }
    }
}
