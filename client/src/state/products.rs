//! Product list state: category list, current filter, and the loaded page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list page drives this state through a fixed lifecycle: categories are
//! loaded once and the filter is seeded from the URL (`initialize`), then
//! every filter change (`apply`) starts a fetch (`begin_fetch`) whose outcome
//! lands through `finish_fetch`. Each fetch carries a sequence number and only
//! the most recent one may write its result, so a slow response never
//! overwrites the page a newer filter asked for.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use catalog::{CatalogError, Filter, FilterUpdate, PageResult, ProductType};

/// Result area of the list view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// A page request is in flight (or none has completed yet).
    #[default]
    Loading,
    /// The latest request succeeded.
    Loaded(PageResult),
    /// The latest request failed; holds the message shown to the user.
    Failed(String),
}

/// List page state.
#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    /// Categories; `None` until the initial load completes.
    pub types: Option<Vec<ProductType>>,
    pub filter: Filter,
    pub list: ListStatus,
    /// Sequence number of the most recently started fetch.
    pub request_seq: u64,
}

impl ProductListState {
    /// Whether the category list has loaded and the filter controls can render.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.types.is_some()
    }

    /// Loaded categories, or an empty slice before the initial load.
    #[must_use]
    pub fn types(&self) -> &[ProductType] {
        self.types.as_deref().unwrap_or(&[])
    }

    /// Store the category list and seed the filter from a URL query string.
    pub fn initialize(&mut self, types: Vec<ProductType>, search: &str) {
        self.filter = catalog::query::decode(search, &types);
        self.types = Some(types);
    }

    /// Fold `update` into the filter. Returns `false` when nothing changed,
    /// in which case no fetch or URL write should follow.
    pub fn apply(&mut self, update: &FilterUpdate) -> bool {
        match self.filter.apply(update) {
            Some(next) => {
                self.filter = next;
                true
            }
            None => false,
        }
    }

    /// Clear the result area and return the sequence number for the new fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.list = ListStatus::Loading;
        self.request_seq
    }

    /// Record the outcome of fetch `seq`. Returns `false` and leaves state
    /// untouched if a newer fetch has started since.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<PageResult, CatalogError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.list = match result {
            Ok(page) => ListStatus::Loaded(page),
            Err(e) => ListStatus::Failed(e.to_string()),
        };
        true
    }
}
