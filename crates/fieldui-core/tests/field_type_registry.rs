use std::collections::HashSet;

use fieldui_core::models::ColumnType;
use fieldui_core::registry;

#[test]
fn registry_ids_are_unique() {
    let mut seen = HashSet::new();
    for definition in registry::field_types() {
        assert!(
            seen.insert(definition.id),
            "duplicate field type {}",
            definition.id
        );
        assert!(registry::field_type(definition.id).is_some());
    }
    assert!(registry::field_type("no_such_type").is_none());
}

#[test]
fn uri_field_type_stores_unbounded_text() {
    let uri = registry::field_type("uri").unwrap();

    assert_eq!(uri.label, "URI");
    assert_eq!(uri.description, "An entity field containing a URI.");
    assert!(!uri.configurable);
    assert_eq!(uri.setting("max_length"), Some("2048"));
    assert_eq!(uri.setting("case_sensitive"), None);

    assert_eq!(uri.properties.len(), 1);
    assert_eq!(uri.properties[0].name, "value");
    assert_eq!(uri.properties[0].data_type, "uri");
    assert_eq!(uri.properties[0].label, "URI value");

    let column = uri.column("value").unwrap();
    assert_eq!(column.column_type, ColumnType::Text);
    assert!(column.not_null);
}
