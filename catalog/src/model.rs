//! Product and product-type records.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// A selectable product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    /// Display text.
    pub label: String,
    /// Identifier referenced by [`Product::kind`] and the `type` query param.
    pub value: String,
}

/// A single product row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// [`ProductType::value`] of the category this product belongs to.
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// Resolve the display label for a type value.
///
/// Unknown values render as themselves so a stale or hand-edited record never
/// blanks out a table cell.
#[must_use]
pub fn type_label(types: &[ProductType], value: &str) -> String {
    types
        .iter()
        .find(|t| t.value == value)
        .map_or_else(|| value.to_owned(), |t| t.label.clone())
}
