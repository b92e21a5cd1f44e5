use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys carried by typed fields; never valid as extra definition keys.
pub const RECORD_FIELDS: &[&str] = &[
    "route_name",
    "title",
    "weight",
    "parent_id",
    "base_route",
    "route_parameters",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalTaskRecord {
    pub route_name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_parameters: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LocalTaskRecord {
    pub fn new(route_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            title: title.into(),
            weight: None,
            parent_id: None,
            base_route: None,
            route_parameters: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn base_route(mut self, base_route: impl Into<String>) -> Self {
        self.base_route = Some(base_route.into());
        self
    }

    pub fn route_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Fills every field the record leaves unset from `defaults`. Fields the
    /// record already carries are kept as they are.
    pub fn merge_defaults(&mut self, defaults: &BasePluginDefinition) {
        if self.weight.is_none() {
            self.weight = defaults.weight;
        }
        if self.parent_id.is_none() {
            self.parent_id.clone_from(&defaults.parent_id);
        }
        if self.base_route.is_none() {
            self.base_route.clone_from(&defaults.base_route);
        }
        if self.route_parameters.is_none() {
            self.route_parameters.clone_from(&defaults.route_parameters);
        }
        for (key, value) in &defaults.extra {
            if RECORD_FIELDS.contains(&key.as_str()) {
                tracing::debug!(key = %key, "ignoring base definition key for a typed field");
                continue;
            }
            self.extra
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

/// Shared defaults merged into every derived task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasePluginDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_parameters: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BasePluginDefinition {
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Local tasks keyed by id, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalTaskSet {
    tasks: IndexMap<String, LocalTaskRecord>,
}

impl LocalTaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a task. A replaced task keeps its original
    /// position.
    pub fn insert(&mut self, id: impl Into<String>, record: LocalTaskRecord) {
        self.tasks.insert(id.into(), record);
    }

    pub fn get(&self, id: &str) -> Option<&LocalTaskRecord> {
        self.tasks.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut LocalTaskRecord> {
        self.tasks.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocalTaskRecord)> {
        self.tasks.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut LocalTaskRecord)> {
        self.tasks
            .iter_mut()
            .map(|(id, record)| (id.as_str(), record))
    }

    /// Re-keys every task as `<base_plugin_id>:<id>`, the form under which
    /// the navigation layer registers derived tasks.
    pub fn qualified(self, base_plugin_id: &str) -> Self {
        let tasks = self
            .tasks
            .into_iter()
            .map(|(id, record)| (plugin_id(base_plugin_id, &id), record))
            .collect();
        Self { tasks }
    }
}

pub fn plugin_id(base_plugin_id: &str, derivative_id: &str) -> String {
    format!("{base_plugin_id}:{derivative_id}")
}
