use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Varchar,
    Text,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub not_null: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub data_type: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldSetting {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldTypeDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub settings: &'static [FieldSetting],
    pub configurable: bool,
    pub properties: &'static [PropertyDefinition],
    pub columns: &'static [ColumnSpec],
}

impl FieldTypeDefinition {
    pub fn setting(&self, name: &str) -> Option<&'static str> {
        self.settings
            .iter()
            .find(|setting| setting.name == name)
            .map(|setting| setting.value)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }
}
