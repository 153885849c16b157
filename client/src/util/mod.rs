//! Browser glue kept out of page and component code.
//!
//! Everything here degrades to a no-op (or an empty value) when compiled
//! without `hydrate`, so SSR and native tests exercise the same call sites.

pub mod url_query;
