//! Product catalog model, filter rules, and the in-memory mock service.
//!
//! This crate owns everything the product list needs that is not rendering:
//! the record types, how a [`Filter`] narrows and pages the collection, how a
//! filter is mirrored into a URL query string, and the mock data source that
//! stands in for a real product API. It has no browser or server dependencies
//! so both `client` (WASM + SSR) and tests can use it directly.

pub mod error;
pub mod filter;
pub mod mock;
pub mod model;
pub mod page;
pub mod query;

pub use error::CatalogError;
pub use filter::{DEFAULT_PAGE_SIZE, Filter, FilterUpdate, MAX_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use mock::{MockCatalog, MockConfig};
pub use model::{Product, ProductType, type_label};
pub use page::{Page, PageResult, page_count, page_window, paginate};
