pub mod display_mode;
pub mod entity_type;
pub mod error;
pub mod field_type;
pub mod local_task;

pub use display_mode::{DisplayMode, DisplayModeKind};
pub use entity_type::{ADMIN_FORM_LINK, EntityTypeDescriptor};
pub use error::{CoreError, CoreErrorKind, CoreResult};
pub use field_type::{ColumnSpec, ColumnType, FieldSetting, FieldTypeDefinition, PropertyDefinition};
pub use local_task::{BasePluginDefinition, LocalTaskRecord, LocalTaskSet, RECORD_FIELDS, plugin_id};
