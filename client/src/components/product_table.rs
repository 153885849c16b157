//! Results table for one page of products.

use catalog::{Product, ProductType, type_label};
use leptos::prelude::*;

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

/// Column headers, in display order.
pub const COLUMNS: [&str; 4] = ["Name", "Description", "Type", "Date"];

/// Cell text for one product row, aligned with [`COLUMNS`].
pub(crate) fn row_cells(product: &Product, types: &[ProductType]) -> [String; 4] {
    [
        product.name.clone(),
        product.description.clone(),
        type_label(types, &product.kind),
        product.date.clone(),
    ]
}

/// Table of products; rows are keyed by product id.
#[component]
pub fn ProductTable(items: Vec<Product>, types: Vec<ProductType>) -> impl IntoView {
    let rows = items
        .iter()
        .map(|product| {
            let cells = row_cells(product, &types)
                .into_iter()
                .map(|text| view! { <td>{text}</td> })
                .collect::<Vec<_>>();
            let key = product.id.clone();
            view! { <tr data-row-key=key>{cells}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="product-table">
            <thead>
                <tr>{COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect::<Vec<_>>()}</tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
