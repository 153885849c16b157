//! In-memory stand-in for the product API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list view talks to this catalog through `client::net::api`, which adds
//! the artificial network latency. Records are generated once at construction
//! from a seeded RNG: categories are fixed, each product draws its category at
//! random. Queries are synchronous and pure apart from the optional simulated
//! failure roll.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CatalogError;
use crate::filter::Filter;
use crate::model::{Product, ProductType};
use crate::page::{PageResult, paginate};

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

/// Delay applied to every product page fetch.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(400);
pub const DEFAULT_TYPE_COUNT: usize = 5;
pub const DEFAULT_PRODUCT_COUNT: usize = 40;
/// Seed used when the caller has no entropy source of its own.
pub const DEFAULT_SEED: u64 = 0x5EED_CA7A_1065;
/// Timestamp stamped on every generated product.
pub const PRODUCT_DATE: &str = "2020-12-12 12:12:12";

/// Shape and behavior of the generated catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct MockConfig {
    pub type_count: usize,
    pub product_count: usize,
    pub latency: Duration,
    /// Probability in `[0, 1]` that a page fetch fails with
    /// [`CatalogError::Timeout`]. Zero disables the failure path.
    pub failure_rate: f64,
    pub seed: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            type_count: DEFAULT_TYPE_COUNT,
            product_count: DEFAULT_PRODUCT_COUNT,
            latency: DEFAULT_LATENCY,
            failure_rate: 0.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl MockConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

/// Generated product catalog answering list queries.
#[derive(Debug)]
pub struct MockCatalog {
    config: MockConfig,
    types: Vec<ProductType>,
    products: Vec<Product>,
    rng: Mutex<StdRng>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockCatalog {
    /// Generate the type list and product collection described by `config`.
    #[must_use]
    pub fn new(config: MockConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let types = generate_types(config.type_count);
        let products = generate_products(config.product_count, &types, &mut rng);
        log::debug!(
            "mock catalog ready: {} types, {} products, seed {:#x}",
            types.len(),
            products.len(),
            config.seed
        );

        Self { config, types, products, rng: Mutex::new(rng) }
    }

    /// Artificial delay callers should wait before delivering a page.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.config.latency
    }

    /// Every selectable category, in display order.
    #[must_use]
    pub fn product_types(&self) -> Vec<ProductType> {
        self.types.clone()
    }

    /// The full, unfiltered collection.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Filter and page the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Timeout`] when the simulated failure roll hits.
    pub fn query(&self, filter: &Filter) -> Result<PageResult, CatalogError> {
        let filtered: Vec<Product> = self.products.iter().filter(|p| filter.matches(p)).cloned().collect();
        let result = paginate(filtered, filter);

        if self.roll_failure() {
            log::warn!("simulated failure for page {} of {:?}", filter.page_number, filter.keyword);
            return Err(CatalogError::Timeout);
        }

        log::debug!(
            "query type={:?} keyword={:?} page={}/{} -> {} of {}",
            filter.kind,
            filter.keyword,
            filter.page_number,
            filter.page_size,
            result.items.len(),
            result.page.total
        );
        Ok(result)
    }

    fn roll_failure(&self) -> bool {
        let rate = self.config.failure_rate;
        if rate.is_nan() || rate <= 0.0 {
            return false;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_bool(rate.min(1.0))
    }
}

fn generate_types(count: usize) -> Vec<ProductType> {
    (1..=count)
        .map(|n| ProductType { label: format!("Product type {n}"), value: format!("type{n}") })
        .collect()
}

fn generate_products(count: usize, types: &[ProductType], rng: &mut StdRng) -> Vec<Product> {
    (1..=count)
        .map(|n| {
            let kind = if types.is_empty() {
                String::new()
            } else {
                types[rng.random_range(0..types.len())].value.clone()
            };
            Product {
                id: n.to_string(),
                name: format!("Product {n}"),
                description: format!("This is product description {n}"),
                kind,
                date: PRODUCT_DATE.to_owned(),
            }
        })
        .collect()
}
