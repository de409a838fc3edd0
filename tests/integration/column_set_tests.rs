//! End-to-end tests over a built column collection: the definitions served
//! to the widget and the cells resolved for response rows.

use datagrid::{ColumnBuilder, DataColumn, DataKey, GridColumn};
use serde_json::{json, Value};

use crate::util::{people, set_from_toml};

const PEOPLE_GRID: &str = r#"
    [[columns]]
    property = "name"
    title = "Name"

    [[columns]]
    property = "age"
    title = "Age"
    class = "text-right"
    width = "80px"

    [[columns]]
    property = "email"
    title = "E-mail"
    sortable = false
    default = "(none)"

    [[columns]]
    kind = "action"
    searchable = false
    sortable = false
    default = "edit"
"#;

#[test]
fn test_served_definitions() {
    let set = set_from_toml(PEOPLE_GRID);

    assert_eq!(
        serde_json::to_value(set.definitions()).unwrap(),
        json!([
            {
                "mData": "name",
                "bSearchable": true,
                "bSortable": true,
                "bVisible": true,
                "sTitle": "Name",
                "mRender": null,
                "sClass": "",
                "sDefaultContent": null,
                "sWidth": null,
            },
            {
                "mData": "age",
                "bSearchable": true,
                "bSortable": true,
                "bVisible": true,
                "sTitle": "Age",
                "mRender": null,
                "sClass": "text-right",
                "sDefaultContent": null,
                "sWidth": "80px",
            },
            {
                "mData": "email",
                "bSearchable": true,
                "bSortable": false,
                "bVisible": true,
                "sTitle": "E-mail",
                "mRender": null,
                "sClass": "",
                "sDefaultContent": "(none)",
                "sWidth": null,
            },
            {
                "mData": null,
                "bSearchable": false,
                "bSortable": false,
                "bVisible": true,
                "sTitle": null,
                "mRender": null,
                "sClass": "",
                "sDefaultContent": "edit",
                "sWidth": null,
            },
        ]),
    );
}

#[test]
fn test_resolving_rows() {
    let set = set_from_toml(PEOPLE_GRID);
    let rows = people();

    let resolved: Vec<Vec<Value>> = rows
        .iter()
        .map(|row| {
            set.resolve_row(row)
                .into_iter()
                .map(|cell| cell.into_owned())
                .collect()
        })
        .collect();

    assert_eq!(
        resolved,
        [
            // A fully populated row.
            [json!("Arya"), json!(32), json!("arya@example.com"), json!("edit")],
            // An explicit null falls back just like an absent field.
            [json!("Brandon"), json!(29), json!("(none)"), json!("edit")],
            [json!("Catelyn"), json!(41), json!("(none)"), json!("edit")],
        ],
    );
}

#[test]
fn test_feature_positions() {
    let set = set_from_toml(PEOPLE_GRID);

    assert_eq!(set.searchable_positions(), [0, 1, 2]);
    assert_eq!(set.sortable_positions(), [0, 1]);
    assert_eq!(set.visible_positions(), [0, 1, 2, 3]);
}

#[test]
fn test_array_shaped_rows() {
    // Columns bound to positions instead of names; the widget sends rows as
    // plain arrays in that mode.
    let mut builder = ColumnBuilder::new();
    for position in 0..2u64 {
        let mut column = DataColumn::new(None);
        column.apply_defaults();
        column.base_mut().set_data_key(Some(DataKey::Index(position)));
        builder.add_column(Box::new(column));
    }
    let set = builder.build();

    let row = json!(["Arya", 32]);
    let cells = set.resolve_row(&row);
    assert_eq!(*cells[0], json!("Arya"));
    assert_eq!(*cells[1], json!(32));

    let definitions = serde_json::to_value(set.definitions()).unwrap();
    assert_eq!(definitions[0]["mData"], json!(0));
    assert_eq!(definitions[1]["mData"], json!(1));
}
