//! Widget state, pagination primitives, and the records widgets list.

pub mod course;
pub mod page_range;
pub mod pagination;
pub mod query_params;
pub mod record;
pub mod student;
pub mod widget_state;
