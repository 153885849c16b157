//! Product list page: filter controls, results table, and pager.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it loads the category list, seeds the
//! filter from the URL query, then fetches the first page and rewrites the
//! URL in normalized form. Afterwards every filter change from the controls
//! fetches a new page and pushes the new query onto the history stack.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use std::sync::Arc;

use catalog::{FilterUpdate, MockCatalog, Page, Product};
use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::pager::Pager;
use crate::components::product_table::ProductTable;
use crate::state::products::{ListStatus, ProductListState};
use crate::util::url_query::{self, HistoryMode};

/// What the results area shows for a given list status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ResultArea {
    Loading,
    /// Failure message; clicking it retries.
    Error(String),
    Empty,
    Table { items: Vec<Product>, page: Page },
}

pub(crate) fn result_area(list: &ListStatus) -> ResultArea {
    match list {
        ListStatus::Loading => ResultArea::Loading,
        ListStatus::Failed(message) => ResultArea::Error(message.clone()),
        ListStatus::Loaded(result) if result.items.is_empty() => ResultArea::Empty,
        ListStatus::Loaded(result) => ResultArea::Table { items: result.items.clone(), page: result.page },
    }
}

/// Product list page.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let state = expect_context::<RwSignal<ProductListState>>();
    let catalog = expect_context::<Arc<MockCatalog>>();

    // Fetch the page for the current filter; also the retry action.
    let load_page = {
        let catalog = catalog.clone();
        Callback::new(move |()| request_page(state, &catalog))
    };

    let set_filter = Callback::new(move |update: FilterUpdate| {
        let changed = state.try_update(|s| s.apply(&update)).unwrap_or(false);
        if !changed {
            return;
        }
        load_page.run(());
        state.with_untracked(|s| url_query::write_filter(&s.filter, HistoryMode::Push));
    });

    // Mount: categories first, then the filter from the URL, then the first page.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let catalog = catalog.clone();
            leptos::task::spawn_local(async move {
                let types = crate::net::api::fetch_product_types(&catalog).await;
                let search = url_query::current_search();
                state.update(|s| s.initialize(types, &search));
                load_page.run(());
                state.with_untracked(|s| url_query::write_filter(&s.filter, HistoryMode::Replace));
            });
        });
    }

    view! {
        <Show
            when=move || state.with(ProductListState::is_ready)
            fallback=move || {
                view! {
                    <div class="product-list product-list--loading">
                        <p>"Loading product types..."</p>
                    </div>
                }
            }
        >
            <div class="product-list">
                <h3 class="product-list__title">"Product List"</h3>
                <FilterBar on_change=set_filter/>
                <ResultPanel on_change=set_filter on_retry=load_page/>
            </div>
        </Show>
    }
}

/// Start a page fetch for the current filter. The response lands through
/// [`ProductListState::finish_fetch`], which drops it if a newer fetch began.
///
/// Only the browser fetches; elsewhere the state is left untouched.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub(crate) fn request_page(state: RwSignal<ProductListState>, catalog: &Arc<MockCatalog>) {
    #[cfg(feature = "hydrate")]
    {
        let seq = state.try_update(ProductListState::begin_fetch).unwrap_or_default();
        let filter = state.with_untracked(|s| s.filter.clone());
        let catalog = Arc::clone(catalog);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_products(&catalog, &filter).await;
            let applied = state.try_update(|s| s.finish_fetch(seq, result)).unwrap_or(false);
            if !applied {
                log::debug!("dropped stale product page #{seq}");
            }
        });
    }
}

/// Results area: loading, error with retry, empty state, or table + pager.
#[component]
fn ResultPanel(on_change: Callback<FilterUpdate>, on_retry: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<ProductListState>>();

    move || match state.with(|s| result_area(&s.list)) {
        ResultArea::Loading => view! {
            <div class="product-list__loading">
                <p>"Loading products..."</p>
            </div>
        }
        .into_any(),
        ResultArea::Error(message) => view! {
            <div class="product-list__error" role="button" on:click=move |_| on_retry.run(())>
                {message}
            </div>
        }
        .into_any(),
        ResultArea::Empty => view! { <div class="product-list__empty">"No data"</div> }.into_any(),
        ResultArea::Table { items, page } => {
            let types = state.with_untracked(|s| s.types().to_vec());
            view! {
                <ProductTable items=items types=types/>
                <Pager page=page on_change=on_change/>
            }
            .into_any()
        }
    }
}
