use super::*;
use catalog::{MockCatalog, MockConfig, Page};

fn types() -> Vec<ProductType> {
    MockCatalog::default().product_types()
}

fn empty_page(page_number: u32) -> PageResult {
    PageResult { items: Vec::new(), page: Page { total: 0, page_number, page_size: 10 } }
}

fn ready_state() -> ProductListState {
    let mut state = ProductListState::default();
    state.initialize(types(), "");
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_not_ready_and_loading() {
    let state = ProductListState::default();
    assert!(!state.is_ready());
    assert!(state.types().is_empty());
    assert_eq!(state.filter, Filter::default());
    assert_eq!(state.list, ListStatus::Loading);
    assert_eq!(state.request_seq, 0);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_seeds_filter_from_url() {
    let mut state = ProductListState::default();
    state.initialize(types(), "?keyword=Product&type=type3&pageNo=2&pageSize=20");
    assert!(state.is_ready());
    assert_eq!(state.types().len(), 5);
    assert_eq!(
        state.filter,
        Filter { keyword: "Product".to_owned(), kind: "type3".to_owned(), page_number: 2, page_size: 20 }
    );
}

#[test]
fn initialize_drops_unknown_type() {
    let mut state = ProductListState::default();
    state.initialize(types(), "type=bogus&pageNo=3");
    assert_eq!(state.filter.kind, "");
    assert_eq!(state.filter.page_number, 3);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_reports_change_and_resets_page() {
    let mut state = ready_state();
    assert!(state.apply(&FilterUpdate::page(3)));
    assert_eq!(state.filter.page_number, 3);
    assert!(state.apply(&FilterUpdate::kind("type2")));
    assert_eq!(state.filter.page_number, 1);
    assert_eq!(state.filter.kind, "type2");
}

#[test]
fn apply_noop_keeps_filter() {
    let mut state = ready_state();
    state.apply(&FilterUpdate::page(2));
    let before = state.filter.clone();
    assert!(!state.apply(&FilterUpdate::keyword("")));
    assert_eq!(state.filter, before);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_clears_previous_result() {
    let mut state = ready_state();
    let seq = state.begin_fetch();
    assert!(state.finish_fetch(seq, Ok(empty_page(1))));
    assert!(matches!(state.list, ListStatus::Loaded(_)));

    let next = state.begin_fetch();
    assert_eq!(next, seq + 1);
    assert_eq!(state.list, ListStatus::Loading);
}

#[test]
fn finish_fetch_records_failure_message() {
    let mut state = ready_state();
    let seq = state.begin_fetch();
    assert!(state.finish_fetch(seq, Err(CatalogError::Timeout)));
    assert_eq!(state.list, ListStatus::Failed("request timed out, click to retry".to_owned()));
}

#[test]
fn stale_response_is_ignored() {
    let mut state = ready_state();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    assert!(state.finish_fetch(second, Ok(empty_page(2))));
    assert!(!state.finish_fetch(first, Ok(empty_page(1))));
    assert_eq!(state.list, ListStatus::Loaded(empty_page(2)));
}

#[test]
fn stale_failure_does_not_replace_loading() {
    let mut state = ready_state();
    let first = state.begin_fetch();
    let _second = state.begin_fetch();
    assert!(!state.finish_fetch(first, Err(CatalogError::Timeout)));
    assert_eq!(state.list, ListStatus::Loading);
}

#[test]
fn retry_after_failure_loads_same_filter() {
    let catalog = MockCatalog::new(MockConfig::default().with_seed(3));
    let mut state = ready_state();
    state.apply(&FilterUpdate::page(2));

    let seq = state.begin_fetch();
    state.finish_fetch(seq, Err(CatalogError::Timeout));

    let retry = state.begin_fetch();
    let result = catalog.query(&state.filter);
    assert!(state.finish_fetch(retry, result));
    let ListStatus::Loaded(page) = &state.list else {
        panic!("expected loaded page");
    };
    assert_eq!(page.page.page_number, 2);
    assert_eq!(page.items[0].id, "11");
}
