use super::*;

fn catalog() -> MockCatalog {
    MockCatalog::new(MockConfig::default().with_seed(7))
}

fn query(catalog: &MockCatalog, filter: &Filter) -> PageResult {
    catalog.query(filter).expect("failure rate is zero")
}

fn everything(catalog: &MockCatalog) -> Filter {
    Filter { page_size: u32::try_from(catalog.products().len()).expect("fits"), ..Filter::default() }
}

// =============================================================
// Generation
// =============================================================

#[test]
fn default_config_matches_constants() {
    let config = MockConfig::default();
    assert_eq!(config.type_count, DEFAULT_TYPE_COUNT);
    assert_eq!(config.product_count, DEFAULT_PRODUCT_COUNT);
    assert_eq!(config.latency, DEFAULT_LATENCY);
    assert_eq!(config.latency, Duration::from_millis(400));
    assert!(config.failure_rate.abs() < f64::EPSILON);
}

#[test]
fn generates_labelled_types() {
    let types = catalog().product_types();
    assert_eq!(types.len(), 5);
    assert_eq!(types[0], ProductType { label: "Product type 1".to_owned(), value: "type1".to_owned() });
    assert_eq!(types[4].value, "type5");
}

#[test]
fn generates_numbered_products_with_known_types() {
    let catalog = catalog();
    let types = catalog.product_types();
    assert_eq!(catalog.products().len(), 40);
    for (i, product) in catalog.products().iter().enumerate() {
        let n = i + 1;
        assert_eq!(product.id, n.to_string());
        assert_eq!(product.name, format!("Product {n}"));
        assert_eq!(product.description, format!("This is product description {n}"));
        assert_eq!(product.date, PRODUCT_DATE);
        assert!(types.iter().any(|t| t.value == product.kind));
    }
}

#[test]
fn same_seed_generates_same_collection() {
    let a = MockCatalog::new(MockConfig::default().with_seed(42));
    let b = MockCatalog::new(MockConfig::default().with_seed(42));
    assert_eq!(a.products(), b.products());
}

#[test]
fn no_types_yields_untyped_products() {
    let catalog = MockCatalog::new(MockConfig { type_count: 0, product_count: 3, ..MockConfig::default() });
    assert!(catalog.product_types().is_empty());
    assert!(catalog.products().iter().all(|p| p.kind.is_empty()));
}

// =============================================================
// Query
// =============================================================

#[test]
fn empty_filter_returns_first_page_of_all() {
    let catalog = catalog();
    let result = query(&catalog, &Filter::default());
    assert_eq!(result.items.len(), 10);
    assert_eq!(result.page.total, 40);
    assert_eq!(result.items[0].id, "1");
}

#[test]
fn type_filter_returns_only_that_type() {
    let catalog = catalog();
    for t in catalog.product_types() {
        let filter = Filter { kind: t.value.clone(), ..everything(&catalog) };
        let result = query(&catalog, &filter);
        let expected = catalog.products().iter().filter(|p| p.kind == t.value).count();
        assert_eq!(result.page.total, expected);
        assert!(result.items.iter().all(|p| p.kind == t.value));
    }
}

#[test]
fn type_totals_cover_collection() {
    let catalog = catalog();
    let sum: usize = catalog
        .product_types()
        .iter()
        .map(|t| query(&catalog, &Filter { kind: t.value.clone(), ..Filter::default() }).page.total)
        .sum();
    assert_eq!(sum, catalog.products().len());
}

#[test]
fn keyword_filter_matches_substring() {
    let catalog = catalog();
    let filter = Filter { keyword: "Product 1".to_owned(), ..everything(&catalog) };
    let result = query(&catalog, &filter);
    let ids: Vec<&str> = result.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19"]);
    assert_eq!(result.page.total, 11);
}

#[test]
fn keyword_filter_matches_description() {
    let catalog = catalog();
    let filter = Filter { keyword: "description 40".to_owned(), ..Filter::default() };
    let result = query(&catalog, &filter);
    assert_eq!(result.page.total, 1);
    assert_eq!(result.items[0].id, "40");
}

#[test]
fn keyword_without_match_is_empty() {
    let catalog = catalog();
    let result = query(&catalog, &Filter { keyword: "nothing".to_owned(), ..Filter::default() });
    assert!(result.items.is_empty());
    assert_eq!(result.page.total, 0);
}

#[test]
fn second_page_continues_first() {
    let catalog = catalog();
    let result = query(&catalog, &Filter { page_number: 2, ..Filter::default() });
    assert_eq!(result.items[0].id, "11");
    assert_eq!(result.items.len(), 10);
    assert_eq!(result.page.page_number, 2);
}

// =============================================================
// Failure simulation
// =============================================================

#[test]
fn certain_failure_rate_always_times_out() {
    let catalog = MockCatalog::new(MockConfig::default().with_failure_rate(1.0));
    for _ in 0..5 {
        assert_eq!(catalog.query(&Filter::default()), Err(CatalogError::Timeout));
    }
}

#[test]
fn zero_and_nan_failure_rates_never_fail() {
    for rate in [0.0, -1.0, f64::NAN] {
        let catalog = MockCatalog::new(MockConfig::default().with_failure_rate(rate));
        for _ in 0..20 {
            assert!(catalog.query(&Filter::default()).is_ok());
        }
    }
}

#[test]
fn timeout_message_prompts_retry() {
    assert_eq!(CatalogError::Timeout.to_string(), "request timed out, click to retry");
}
