use datagrid::{ColumnBuilder, ColumnSet, ColumnsConfig};
use serde_json::{json, Value};

/// Parses TOML text and builds the column collection it declares.
pub fn set_from_toml(contents: &str) -> ColumnSet {
    let config = ColumnsConfig::from_toml_str(contents).unwrap();
    ColumnBuilder::from_config(&config).build()
}

/// Rows shaped like the people grid these tests revolve around. The second
/// row carries an explicit `null`, the third is missing a field outright.
pub fn people() -> Vec<Value> {
    vec![
        json!({ "name": "Arya", "age": 32, "email": "arya@example.com" }),
        json!({ "name": "Brandon", "age": 29, "email": null }),
        json!({ "name": "Catelyn", "age": 41 }),
    ]
}
