//! Tests config files that should parse and build cleanly.

use std::io::Write;

use datagrid::{ColumnBuilder, ColumnKind, ColumnsConfig, GridColumn};

use crate::util::set_from_toml;

#[test]
fn test_empty_config() {
    let set = set_from_toml("");
    assert!(set.is_empty());
}

#[test]
fn test_property_only_columns() {
    let set = set_from_toml(
        r#"
        [[columns]]
        property = "name"

        [[columns]]
        property = "age"
        "#,
    );

    assert_eq!(set.len(), 2);

    // Nothing was overridden, so every column sits at the baseline.
    for column in set.iter() {
        assert_eq!(column.kind(), ColumnKind::Data);
        assert!(column.searchable());
        assert!(column.sortable());
        assert!(column.visible());
        assert_eq!(column.title(), None);
        assert_eq!(column.css_class(), "");
    }
}

#[test]
fn test_every_recognized_key_at_once() {
    let set = set_from_toml(
        r#"
        [[columns]]
        property = "age"
        searchable = false
        sortable = false
        visible = false
        title = "Age"
        render = { helper = "number" }
        class = "text-right"
        default = "-"
        width = "80px"
        "#,
    );

    let column = set.get(0).unwrap();
    assert!(!column.searchable());
    assert!(!column.sortable());
    assert!(!column.visible());
    assert_eq!(column.title(), Some("Age"));
    assert_eq!(
        column.renderer(),
        Some(&serde_json::json!({ "helper": "number" }))
    );
    assert_eq!(column.css_class(), "text-right");
    assert_eq!(column.default_content(), Some("-"));
    assert_eq!(column.width(), Some("80px"));
}

#[test]
fn test_mixed_kinds_config() {
    let set = set_from_toml(
        r#"
        [[columns]]
        property = "name"
        title = "Name"

        [[columns]]
        kind = "virtual"
        property = "full_name"
        sortable = false

        [[columns]]
        kind = "action"
        searchable = false
        sortable = false
        default = ""
        "#,
    );

    assert_eq!(set.len(), 3);
    assert_eq!(set.get(0).unwrap().kind(), ColumnKind::Data);
    assert_eq!(set.get(1).unwrap().kind(), ColumnKind::Virtual);
    assert_eq!(set.get(2).unwrap().kind(), ColumnKind::Action);

    // The action column carries no property even though it could have
    // declared one; the other two read theirs.
    assert_eq!(set.get(1).unwrap().property(), Some("full_name"));
    assert_eq!(set.get(2).unwrap().property(), None);
    assert_eq!(set.get(2).unwrap().default_content(), Some(""));
}

#[test]
fn test_unknown_keys_do_not_block_building() {
    let config = ColumnsConfig::from_toml_str(
        r#"
        [[columns]]
        property = "name"
        sortible = false
        "#,
    )
    .unwrap();

    assert_eq!(
        config.columns[0].unknown_keys().collect::<Vec<_>>(),
        ["sortible"]
    );

    let set = ColumnBuilder::from_config(&config).build();
    assert!(set.get(0).unwrap().sortable(), "the typo changed nothing");
}

#[test]
fn test_config_read_from_disk() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(
        br#"
        [[columns]]
        property = "name"
        title = "Name"
        "#,
    )?;

    let config = ColumnsConfig::from_path(file.path())?;
    let set = ColumnBuilder::from_config(&config).build();

    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0).unwrap().title(), Some("Name"));

    Ok(())
}
