//! User-controlled list filter and the rules for changing it.
//!
//! DESIGN
//! ======
//! Every UI control produces a [`FilterUpdate`] naming only the fields it
//! touches. [`Filter::apply`] folds the update in and resets the page number
//! to 1 unless the update sets it explicitly, so switching category or keyword
//! never strands the user on a page past the end of the new result set.

use serde::{Deserialize, Serialize};

use crate::model::Product;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Page size used when none is given or the given one is unusable.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sizes offered by the pagination size changer.
pub const PAGE_SIZE_OPTIONS: [u32; 2] = [10, 20];

/// Largest page size accepted from the URL.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Current list query: keyword, category, and page position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Case-sensitive substring matched against name and description.
    pub keyword: String,
    /// Category value; empty means every category.
    pub kind: String,
    /// 1-based page number.
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            kind: String::new(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Filter {
    /// Whether `product` passes the category and keyword conditions.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.kind.is_empty() && product.kind != self.kind {
            return false;
        }
        product.name.contains(&self.keyword) || product.description.contains(&self.keyword)
    }

    /// Index of the first record on the current page.
    #[must_use]
    pub fn offset(&self) -> usize {
        let page_index = self.page_number.saturating_sub(1) as usize;
        page_index.saturating_mul(self.page_size as usize)
    }

    /// Produce the filter that results from `update`, or `None` when the
    /// update would leave the list unchanged.
    ///
    /// An update whose every field already equals the current value is a
    /// no-op, even though a merged update would otherwise reset the page.
    #[must_use]
    pub fn apply(&self, update: &FilterUpdate) -> Option<Self> {
        if update.is_noop_for(self) {
            return None;
        }

        let next = Self {
            keyword: update.keyword.clone().unwrap_or_else(|| self.keyword.clone()),
            kind: update.kind.clone().unwrap_or_else(|| self.kind.clone()),
            page_number: update.page_number.unwrap_or(1).max(1),
            page_size: update.page_size.unwrap_or(self.page_size).clamp(1, MAX_PAGE_SIZE),
        };

        (next != *self).then_some(next)
    }
}

/// A partial change to a [`Filter`]; `None` fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub keyword: Option<String>,
    pub kind: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl FilterUpdate {
    /// Change the search keyword.
    #[must_use]
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self { keyword: Some(keyword.into()), ..Self::default() }
    }

    /// Change the category.
    #[must_use]
    pub fn kind(kind: impl Into<String>) -> Self {
        Self { kind: Some(kind.into()), ..Self::default() }
    }

    /// Move to another page, keeping every other field.
    #[must_use]
    pub fn page(page_number: u32) -> Self {
        Self { page_number: Some(page_number), ..Self::default() }
    }

    /// Change the page size.
    #[must_use]
    pub fn page_size(page_size: u32) -> Self {
        Self { page_size: Some(page_size), ..Self::default() }
    }

    fn is_noop_for(&self, filter: &Filter) -> bool {
        self.keyword.as_ref().is_none_or(|k| *k == filter.keyword)
            && self.kind.as_ref().is_none_or(|k| *k == filter.kind)
            && self.page_number.is_none_or(|p| p == filter.page_number)
            && self.page_size.is_none_or(|s| s == filter.page_size)
    }
}
