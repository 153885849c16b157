//! Root application component with routing and context providers.

use std::sync::Arc;

use catalog::MockCatalog;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::products::ProductListPage;
use crate::state::products::ProductListState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the mock catalog and the list state as contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = Arc::new(MockCatalog::new(crate::config::catalog_config()));
    let products = RwSignal::new(ProductListState::default());

    provide_context(catalog);
    provide_context(products);

    view! {
        <Stylesheet id="leptos" href="/pkg/product-list.css"/>
        <Title text="Product List"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductListPage/>
            </Routes>
        </Router>
    }
}
