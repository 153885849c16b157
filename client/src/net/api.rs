//! Async fetch helpers over the mock catalog.
//!
//! Client-side (hydrate): page fetches wait out the catalog latency on a
//! browser timer before resolving.
//! Server-side (SSR): no delay; the list page never fetches during SSR, so
//! these only run there in tests.
//!
//! ERROR HANDLING
//! ==============
//! Page fetches return `Result<_, CatalogError>`; the list state renders the
//! error's message and offers a retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use catalog::{CatalogError, Filter, MockCatalog, PageResult, ProductType};

/// Fetch the selectable categories. Resolves immediately.
pub async fn fetch_product_types(catalog: &MockCatalog) -> Vec<ProductType> {
    catalog.product_types()
}

/// Fetch one filtered page of products after the catalog's artificial delay.
///
/// # Errors
///
/// Returns [`CatalogError::Timeout`] when the catalog simulates a failure.
pub async fn fetch_products(catalog: &MockCatalog, filter: &Filter) -> Result<PageResult, CatalogError> {
    let result = catalog.query(filter);
    simulate_latency(catalog.latency()).await;
    result
}

async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
