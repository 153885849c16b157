//! Mock catalog settings.
//!
//! The catalog runs inside the browser, so its knobs are read at build time
//! rather than from the runtime environment:
//!
//! - `MOCK_LATENCY_MS`: delay before a product page is delivered (default 400)
//! - `MOCK_FAILURE_RATE`: probability in `[0, 1]` that a page fetch fails
//!   (default 0, failures disabled)
//!
//! The RNG seed that assigns product categories comes from the browser clock,
//! so every page load shuffles categories like a fresh dataset would.

use std::time::Duration;

use catalog::MockConfig;
use catalog::mock::DEFAULT_LATENCY;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Build the catalog configuration for this build and page load.
#[must_use]
pub fn catalog_config() -> MockConfig {
    MockConfig::default()
        .with_latency(parse_latency(option_env!("MOCK_LATENCY_MS")))
        .with_failure_rate(parse_failure_rate(option_env!("MOCK_FAILURE_RATE")))
        .with_seed(seed())
}

fn parse_latency(raw: Option<&str>) -> Duration {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(DEFAULT_LATENCY, Duration::from_millis)
}

fn parse_failure_rate(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|rate| rate.is_finite())
        .map_or(0.0, |rate| rate.clamp(0.0, 1.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        catalog::mock::DEFAULT_SEED
    }
}
