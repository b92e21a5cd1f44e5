pub mod in_memory;
pub mod translation;

pub use in_memory::{EntityTypeEntry, InMemoryEntityTypes};
pub use translation::{PassthroughTranslator, TranslationOptions, Translator};

use crate::models::{CoreResult, DisplayMode, DisplayModeKind, EntityTypeDescriptor};

pub trait EntityTypeRegistry: Send + Sync {
    /// Entity type definitions in registration order.
    fn definitions(&self) -> CoreResult<Vec<EntityTypeDescriptor>>;
}

pub trait ModeProvider: Send + Sync {
    fn form_modes(&self, entity_type_id: &str) -> CoreResult<Vec<DisplayMode>>;

    fn view_modes(&self, entity_type_id: &str) -> CoreResult<Vec<DisplayMode>>;

    fn modes(&self, kind: DisplayModeKind, entity_type_id: &str) -> CoreResult<Vec<DisplayMode>> {
        match kind {
            DisplayModeKind::Form => self.form_modes(entity_type_id),
            DisplayModeKind::View => self.view_modes(entity_type_id),
        }
    }
}
