use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DisplayModeKind {
    Form,
    View,
}

impl DisplayModeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::View => "view",
        }
    }

    /// Route parameter that carries the mode id on per-mode tabs.
    pub fn route_parameter(self) -> &'static str {
        match self {
            Self::Form => "form_mode_name",
            Self::View => "view_mode_name",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DisplayMode {
    pub id: String,
    pub label: String,
}

impl DisplayMode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
