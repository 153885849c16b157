//! URL query-string codec for [`Filter`].
//!
//! The list view mirrors its filter into `?keyword=..&type=..&pageNo=..&pageSize=..`
//! so a view can be bookmarked or shared. Decoding never fails: anything
//! missing, malformed, or out of range falls back to the default for that
//! field, and a category is only accepted if it names a known type.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::filter::{DEFAULT_PAGE_SIZE, Filter, MAX_PAGE_SIZE};
use crate::model::ProductType;

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

#[derive(Serialize)]
struct EncodedFilter<'a> {
    keyword: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(rename = "pageNo")]
    page_no: u32,
    #[serde(rename = "pageSize")]
    page_size: u32,
}

#[derive(Default, Deserialize)]
struct RawFilter {
    keyword: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(rename = "pageNo")]
    page_no: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

/// Encode `filter` as a query string without the leading `?`.
///
/// # Errors
///
/// Returns [`CatalogError::Encode`] if the form serializer rejects the value.
pub fn encode(filter: &Filter) -> Result<String, CatalogError> {
    let encoded = EncodedFilter {
        keyword: &filter.keyword,
        kind: &filter.kind,
        page_no: filter.page_number,
        page_size: filter.page_size,
    };
    serde_html_form::to_string(&encoded).map_err(|e| CatalogError::Encode(e.to_string()))
}

/// Decode a query string (with or without the leading `?`) into a filter,
/// validating the category against `types`.
#[must_use]
pub fn decode(search: &str, types: &[ProductType]) -> Filter {
    let raw_query = search.strip_prefix('?').unwrap_or(search);
    let raw = match serde_html_form::from_str::<RawFilter>(raw_query) {
        Ok(raw) => raw,
        Err(e) => {
            log::debug!("ignoring undecodable filter query {raw_query:?}: {e}");
            RawFilter::default()
        }
    };

    let kind = raw
        .kind
        .filter(|kind| types.iter().any(|t| t.value == *kind))
        .unwrap_or_default();

    Filter {
        keyword: raw.keyword.unwrap_or_default(),
        kind,
        page_number: parse_page_number(raw.page_no.as_deref()),
        page_size: parse_page_size(raw.page_size.as_deref()),
    }
}

/// Parse a 1-based page number, defaulting to 1.
#[must_use]
pub fn parse_page_number(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// Parse a page size in `1..=MAX_PAGE_SIZE`, defaulting to [`DEFAULT_PAGE_SIZE`].
#[must_use]
pub fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| (1..=MAX_PAGE_SIZE).contains(n))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
