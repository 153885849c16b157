//! Paginated result slices and page-button layout.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::model::Product;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Position of a result slice within the filtered collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Size of the filtered collection before slicing.
    pub total: usize,
    pub page_number: u32,
    pub page_size: u32,
}

/// One page of products plus its position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<Product>,
    pub page: Page,
}

/// Slice an already-filtered collection down to the page `filter` asks for.
///
/// Offsets past the end yield an empty page; `total` is always the full
/// filtered length.
#[must_use]
pub fn paginate(filtered: Vec<Product>, filter: &Filter) -> PageResult {
    let total = filtered.len();
    let items = filtered
        .into_iter()
        .skip(filter.offset())
        .take(filter.page_size as usize)
        .collect();

    PageResult {
        items,
        page: Page { total, page_number: filter.page_number, page_size: filter.page_size },
    }
}

/// Number of pages needed to show `total` records `page_size` at a time.
#[must_use]
pub fn page_count(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(page_size as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page buttons to render around `current`: the first and last page, a
/// window of two pages either side of `current`, and `None` for each elided
/// gap.
#[must_use]
pub fn page_window(total_pages: u32, current: u32) -> Vec<Option<u32>> {
    if total_pages == 0 {
        return vec![];
    }
    window(total_pages, current.clamp(1, total_pages), 1, 2, 2, 1)
}

fn window(
    last_page: u32,
    current: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page.saturating_add(1));
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(left_current));
    let mid_end = current.saturating_add(right_current + 1).min(last_page.saturating_add(1));

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}
