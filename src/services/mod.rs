//! Widget assembly and the collaborators it pulls data from.

pub mod catalog;
pub mod collection;
pub mod widget_table;
