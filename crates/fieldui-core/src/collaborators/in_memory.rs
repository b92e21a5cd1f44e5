use serde::{Deserialize, Serialize};

use crate::collaborators::{EntityTypeRegistry, ModeProvider};
use crate::models::{CoreResult, DisplayMode, EntityTypeDescriptor};

/// One entity type together with the modes configured for it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntityTypeEntry {
    #[serde(flatten)]
    pub descriptor: EntityTypeDescriptor,
    #[serde(default)]
    pub form_modes: Vec<DisplayMode>,
    #[serde(default)]
    pub view_modes: Vec<DisplayMode>,
}

impl EntityTypeEntry {
    pub fn new(descriptor: EntityTypeDescriptor) -> Self {
        Self {
            descriptor,
            form_modes: Vec::new(),
            view_modes: Vec::new(),
        }
    }

    pub fn form_mode(mut self, id: &str, label: &str) -> Self {
        self.form_modes.push(DisplayMode::new(id, label));
        self
    }

    pub fn view_mode(mut self, id: &str, label: &str) -> Self {
        self.view_modes.push(DisplayMode::new(id, label));
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryEntityTypes {
    entries: Vec<EntityTypeEntry>,
}

impl InMemoryEntityTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity type. Re-registering an id replaces the earlier
    /// entry in place.
    pub fn register(&mut self, entry: EntityTypeEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.descriptor.id == entry.descriptor.id)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn with(mut self, entry: EntityTypeEntry) -> Self {
        self.register(entry);
        self
    }

    fn entry(&self, entity_type_id: &str) -> Option<&EntityTypeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.descriptor.id == entity_type_id)
    }
}

impl FromIterator<EntityTypeEntry> for InMemoryEntityTypes {
    fn from_iter<I: IntoIterator<Item = EntityTypeEntry>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.register(entry);
        }
        registry
    }
}

impl EntityTypeRegistry for InMemoryEntityTypes {
    fn definitions(&self) -> CoreResult<Vec<EntityTypeDescriptor>> {
        Ok(self
            .entries
            .iter()
            .map(|entry| entry.descriptor.clone())
            .collect())
    }
}

// Unknown entity types have no modes, matching an empty mode configuration.
impl ModeProvider for InMemoryEntityTypes {
    fn form_modes(&self, entity_type_id: &str) -> CoreResult<Vec<DisplayMode>> {
        Ok(self
            .entry(entity_type_id)
            .map(|entry| entry.form_modes.clone())
            .unwrap_or_default())
    }

    fn view_modes(&self, entity_type_id: &str) -> CoreResult<Vec<DisplayMode>> {
        Ok(self
            .entry(entity_type_id)
            .map(|entry| entry.view_modes.clone())
            .unwrap_or_default())
    }
}
