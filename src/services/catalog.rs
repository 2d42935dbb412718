//! Seeded in-memory collections backing the demo widget endpoints.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::models::course::Course;
use crate::models::student::Student;
use crate::services::collection::MemoryCollection;
use crate::services::widget_table::{Column, MemberAction};

const SEED_COURSES: u64 = 37;
const SEED_STUDENTS: u64 = 12;

/// Collections served by the widget endpoints.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: MemoryCollection<Course>,
    pub students: MemoryCollection<Student>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let base = seed_epoch();
        let courses: Vec<Course> = (1..=SEED_COURSES)
            .map(|i| Course {
                id: Uuid::from_u128(0xC0_0000 + i as u128),
                title: format!("Course {i:03}"),
                credits: (i % 5) as i64 + 1,
                created_at: base + Duration::hours(i as i64),
            })
            .collect();
        let students: Vec<Student> = (1..=SEED_STUDENTS)
            .map(|i| Student {
                id: Uuid::from_u128(0x50_0000 + i as u128),
                name: format!("Student {i:02}"),
                email: format!("student{i:02}@example.test"),
                created_at: base + Duration::minutes(i as i64 * 30),
            })
            .collect();

        tracing::debug!(
            courses = SEED_COURSES,
            students = SEED_STUDENTS,
            "Seeded widget catalog"
        );

        Self {
            courses: MemoryCollection::new(courses),
            students: MemoryCollection::new(students),
        }
    }
}

fn seed_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn course_columns() -> Vec<Column> {
    vec![
        Column::plain("Id", "id"),
        Column::sortable("Title", "title"),
        Column::sortable("Credits", "credits"),
        Column::sortable("Created At", "created_at"),
    ]
}

pub fn student_columns() -> Vec<Column> {
    vec![
        Column::plain("Id", "id"),
        Column::sortable("Name", "name"),
        Column::plain("Email", "email"),
        Column::sortable("Created At", "created_at"),
    ]
}

pub const DEFAULT_ACTIONS: &[MemberAction] =
    &[MemberAction::View, MemberAction::Edit, MemberAction::Delete];
