use crate::models::{ColumnSpec, ColumnType, FieldSetting, FieldTypeDefinition, PropertyDefinition};

// Browsers cap URLs at roughly 2000 characters; 2048 leaves headroom.
const URI_SETTINGS: &[FieldSetting] = &[FieldSetting {
    name: "max_length",
    value: "2048",
}];
const URI_PROPERTIES: &[PropertyDefinition] = &[PropertyDefinition {
    name: "value",
    data_type: "uri",
    label: "URI value",
}];
const URI_COLUMNS: &[ColumnSpec] = &[ColumnSpec {
    name: "value",
    column_type: ColumnType::Text,
    not_null: true,
}];

const ALL_FIELD_TYPES: [FieldTypeDefinition; 1] = [FieldTypeDefinition {
    id: "uri",
    label: "URI",
    description: "An entity field containing a URI.",
    settings: URI_SETTINGS,
    configurable: false,
    properties: URI_PROPERTIES,
    columns: URI_COLUMNS,
}];

pub fn field_types() -> &'static [FieldTypeDefinition] {
    &ALL_FIELD_TYPES
}

pub fn field_type(id: &str) -> Option<&'static FieldTypeDefinition> {
    ALL_FIELD_TYPES.iter().find(|definition| definition.id == id)
}
