use super::*;
use catalog::{MockCatalog, ProductType};

fn types() -> Vec<ProductType> {
    MockCatalog::default().product_types()
}

#[test]
fn filter_href_appends_query_to_path() {
    assert_eq!(filter_href("/", &Filter::default()), "/?keyword=&type=&pageNo=1&pageSize=10");
}

#[test]
fn filter_href_keeps_nested_path() {
    let filter = Filter { kind: "type4".to_owned(), page_number: 2, ..Filter::default() };
    assert_eq!(filter_href("/shop/list", &filter), "/shop/list?keyword=&type=type4&pageNo=2&pageSize=10");
}

#[test]
fn href_reloads_into_same_filter() {
    let filter = Filter { keyword: "description 2".to_owned(), kind: "type1".to_owned(), page_number: 3, page_size: 20 };
    let href = filter_href("/", &filter);
    let search = href.trim_start_matches('/');
    assert_eq!(catalog::query::decode(search, &types()), filter);
}

#[test]
fn current_search_is_empty_off_browser() {
    assert_eq!(current_search(), "");
}

#[test]
fn write_filter_is_noop_off_browser() {
    write_filter(&Filter::default(), HistoryMode::Push);
    write_filter(&Filter::default(), HistoryMode::Replace);
}
