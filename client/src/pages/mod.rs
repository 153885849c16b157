//! Route-level screens. The app has a single route, the product list.

pub mod products;
