//! Page-button window and first/prev/next/last eligibility for the pager.

use serde::Serialize;

/// Maximum number of page buttons shown at once.
pub const MAX_PAGE_BUTTONS: u64 = 5;

/// Page numbers to expose as direct links around `current_page`.
///
/// Up to [`MAX_PAGE_BUTTONS`] pages, kept roughly centered on the current
/// page without running past the first or last page.
pub fn build_buttons(current_page: u64, total_pages: u64) -> Vec<u64> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).collect();
    }

    let half = MAX_PAGE_BUTTONS / 2;
    let start = if current_page <= half {
        1
    } else if current_page >= total_pages - half {
        total_pages - (MAX_PAGE_BUTTONS - 1)
    } else {
        current_page - half
    };
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);

    (start.max(1)..=end).collect()
}

/// Whether the first/prev and next/last links are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigability {
    pub show_first_prev: bool,
    pub show_next_last: bool,
}

pub fn navigability(current_page: u64, total_pages: u64) -> Navigability {
    Navigability {
        show_first_prev: current_page > 1,
        show_next_last: current_page < total_pages,
    }
}

pub fn prev_page(current_page: u64) -> Option<u64> {
    (current_page > 1).then(|| current_page - 1)
}

/// `None` on the last page, and also past it.
pub fn next_page(current_page: u64, total_pages: u64) -> Option<u64> {
    (current_page < total_pages).then(|| current_page + 1)
}

/// Everything the pager needs to know about the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub buttons: Vec<u64>,
    pub current: u64,
    pub show_first_prev: bool,
    pub show_next_last: bool,
}

impl PageRange {
    pub fn new(current_page: u64, total_pages: u64) -> Self {
        let nav = navigability(current_page, total_pages);
        Self {
            buttons: build_buttons(current_page, total_pages),
            current: current_page,
            show_first_prev: nav.show_first_prev,
            show_next_last: nav.show_next_last,
        }
    }
}
