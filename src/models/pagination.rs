//! Collection windowing: which slice of an ordered collection one page covers.

use serde::Serialize;

use crate::models::widget_state::{PaginationState, SortOrder};

/// Offset/limit/order descriptor handed to the data source.
///
/// The offset is never clamped against the collection size; a page past the
/// end is expected to come back empty from the data source.
///
/// `sort_key` is copied verbatim from the request token. It must be checked
/// against the sortable columns before it reaches a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowSpec {
    pub offset: u64,
    pub limit: u64,
    pub sort_key: String,
    pub order: SortOrder,
}

impl WindowSpec {
    pub fn new(state: &PaginationState, page_size: u64) -> Self {
        let limit = page_size.max(1);
        Self {
            offset: state.page.saturating_sub(1).saturating_mul(limit),
            limit,
            sort_key: state.sort_key.clone(),
            order: state.order,
        }
    }
}

/// Number of pages needed for `total_count` items; `0` for an empty collection.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size.max(1))
}

/// Summary line data: which page of how many, and which items it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    pub page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub start_index: u64,
    pub end_index: u64,
}

impl PaginationInfo {
    pub fn new(window: &WindowSpec, page: u64, total_count: u64, page_len: u64) -> Self {
        let (start_index, end_index) = if page_len == 0 {
            (0, 0)
        } else {
            (window.offset + 1, window.offset + page_len)
        };
        Self {
            page,
            total_pages: total_pages(total_count, window.limit),
            total_count,
            start_index,
            end_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: u64) -> PaginationState {
        PaginationState {
            page,
            ..PaginationState::default()
        }
    }

    #[test]
    fn window_offset_calculation() {
        let window = WindowSpec::new(&state(3), 10);
        assert_eq!(window.offset, 20);
        assert_eq!(window.limit, 10);
    }

    #[test]
    fn window_first_page_starts_at_zero() {
        assert_eq!(WindowSpec::new(&state(1), 25).offset, 0);
    }

    #[test]
    fn window_passes_sort_through() {
        let state = PaginationState {
            sort_key: "title".to_string(),
            order: SortOrder::Asc,
            page: 2,
        };
        let window = WindowSpec::new(&state, 10);
        assert_eq!(window.sort_key, "title");
        assert_eq!(window.order, SortOrder::Asc);
    }

    #[test]
    fn window_does_not_clamp_past_the_end() {
        assert_eq!(WindowSpec::new(&state(500), 10).offset, 4990);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn total_pages_empty_collection() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn info_for_partial_last_page() {
        let window = WindowSpec::new(&state(3), 10);
        let info = PaginationInfo::new(&window, 3, 25, 5);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.start_index, 21);
        assert_eq!(info.end_index, 25);
    }

    #[test]
    fn info_for_empty_page() {
        let window = WindowSpec::new(&state(9), 10);
        let info = PaginationInfo::new(&window, 9, 25, 0);
        assert_eq!(info.start_index, 0);
        assert_eq!(info.end_index, 0);
        assert_eq!(info.page, 9);
    }
}
