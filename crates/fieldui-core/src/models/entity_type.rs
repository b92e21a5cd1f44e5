use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const ADMIN_FORM_LINK: &str = "admin-form";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntityTypeDescriptor {
    pub id: String,
    #[serde(default)]
    pub fieldable: bool,
    #[serde(default)]
    pub link_templates: IndexMap<String, String>,
}

impl EntityTypeDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fieldable: false,
            link_templates: IndexMap::new(),
        }
    }

    pub fn fieldable(mut self, fieldable: bool) -> Self {
        self.fieldable = fieldable;
        self
    }

    pub fn with_link_template(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.link_templates.insert(name.into(), path.into());
        self
    }

    pub fn is_fieldable(&self) -> bool {
        self.fieldable
    }

    pub fn has_link_template(&self, name: &str) -> bool {
        self.link_templates.contains_key(name)
    }

    pub fn link_template(&self, name: &str) -> Option<&str> {
        self.link_templates.get(name).map(String::as_str)
    }

    /// Entity types that get field UI tabs: fieldable and editable through an
    /// admin form.
    pub fn has_field_ui(&self) -> bool {
        self.is_fieldable() && self.has_link_template(ADMIN_FORM_LINK)
    }
}
