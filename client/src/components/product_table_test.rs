use super::*;

fn product(kind: &str) -> Product {
    Product {
        id: "7".to_owned(),
        name: "Product 7".to_owned(),
        description: "This is product description 7".to_owned(),
        kind: kind.to_owned(),
        date: "2020-12-12 12:12:12".to_owned(),
    }
}

fn types() -> Vec<ProductType> {
    vec![ProductType { label: "Product type 2".to_owned(), value: "type2".to_owned() }]
}

#[test]
fn row_cells_follow_column_order() {
    let cells = row_cells(&product("type2"), &types());
    assert_eq!(
        cells,
        ["Product 7", "This is product description 7", "Product type 2", "2020-12-12 12:12:12"]
    );
    assert_eq!(COLUMNS, ["Name", "Description", "Type", "Date"]);
}

#[test]
fn row_cells_show_raw_value_for_unknown_type() {
    let cells = row_cells(&product("type9"), &types());
    assert_eq!(cells[2], "type9");
}
