//! Mirror the list filter into the browser URL.
//!
//! The filter is read from `location.search` once when the list page mounts
//! and written back with the History API after every change, so the address
//! bar always holds a shareable link to the current view. Writes go straight
//! to `history` instead of through the router: the route itself never
//! changes, only its query string.

#[cfg(test)]
#[path = "url_query_test.rs"]
mod url_query_test;

use catalog::Filter;

/// How a filter write affects the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Add an entry (user-driven filter changes).
    Push,
    /// Overwrite the current entry (normalizing the URL on first load).
    Replace,
}

/// Build `pathname?query` for `filter`.
///
/// Falls back to the bare pathname if the filter cannot be encoded.
#[must_use]
pub fn filter_href(pathname: &str, filter: &Filter) -> String {
    match catalog::query::encode(filter) {
        Ok(query) => format!("{pathname}?{query}"),
        Err(e) => {
            log::warn!("filter not written to URL: {e}");
            pathname.to_owned()
        }
    }
}

/// The current `location.search`, or an empty string outside the browser.
pub fn current_search() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Write `filter` into the address bar.
pub fn write_filter(filter: &Filter, mode: HistoryMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pathname = window.location().pathname().unwrap_or_else(|_| "/".to_owned());
        let href = filter_href(&pathname, filter);
        let Ok(history) = window.history() else {
            return;
        };
        let state = wasm_bindgen::JsValue::NULL;
        let written = match mode {
            HistoryMode::Push => history.push_state_with_url(&state, "", Some(&href)),
            HistoryMode::Replace => history.replace_state_with_url(&state, "", Some(&href)),
        };
        if let Err(e) = written {
            log::warn!("history update failed for {href}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filter, mode);
    }
}
