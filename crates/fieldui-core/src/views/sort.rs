use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::collaborators::{TranslationOptions, Translator};

pub const BROKEN_HANDLER_ID: &str = "broken";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortQuery {
    pub order_by: Vec<OrderBy>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SortHandlerDefinition {
    pub plugin_id: String,
    pub label: String,
    pub field: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortHandler {
    Standard(SortHandlerDefinition),
    /// Stands in for a handler whose plugin is missing, so a view referencing
    /// it still loads.
    Broken { requested: String },
}

impl SortHandler {
    pub fn plugin_id(&self) -> &str {
        match self {
            Self::Standard(definition) => &definition.plugin_id,
            Self::Broken { .. } => BROKEN_HANDLER_ID,
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken { .. })
    }

    pub fn admin_label(&self, translator: &dyn Translator) -> String {
        match self {
            Self::Standard(definition) => definition.label.clone(),
            Self::Broken { requested } => translator.translate(
                "Broken/missing handler (@plugin_id)",
                &[("@plugin_id", requested.as_str())],
                &TranslationOptions::default(),
            ),
        }
    }

    /// Adds this handler's ordering to `query`. Broken handlers leave the
    /// query untouched.
    pub fn apply(&self, query: &mut SortQuery, direction: SortDirection) {
        match self {
            Self::Standard(definition) => query.order_by.push(OrderBy {
                field: definition.field.clone(),
                direction,
            }),
            Self::Broken { requested } => {
                tracing::warn!(plugin_id = %requested, "skipping broken sort handler");
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SortHandlerRegistry {
    handlers: IndexMap<String, SortHandlerDefinition>,
}

impl SortHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: SortHandlerDefinition) {
        self.handlers
            .insert(definition.plugin_id.clone(), definition);
    }

    pub fn contains(&self, plugin_id: &str) -> bool {
        self.handlers.contains_key(plugin_id)
    }

    /// Resolves `plugin_id`, falling back to the broken handler when no such
    /// plugin is registered.
    pub fn resolve(&self, plugin_id: &str) -> SortHandler {
        match self.handlers.get(plugin_id) {
            Some(definition) => SortHandler::Standard(definition.clone()),
            None => {
                tracing::debug!(plugin_id, "sort handler not found");
                SortHandler::Broken {
                    requested: plugin_id.to_string(),
                }
            }
        }
    }
}
