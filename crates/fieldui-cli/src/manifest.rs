use std::path::Path;
use std::sync::Arc;

use fieldui_core::collaborators::{EntityTypeEntry, InMemoryEntityTypes, PassthroughTranslator};
use fieldui_core::derivative::{
    DEFAULT_BASE_PLUGIN_ID, DEFAULT_ROUTE_PREFIX, DeriverConfig, LocalTaskDeriver,
};
use fieldui_core::models::BasePluginDefinition;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Entity types, their modes, and the defaults shared by every derived task.
#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_base_plugin_id")]
    pub base_plugin_id: String,
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
    #[serde(default)]
    pub base_definition: BasePluginDefinition,
    #[serde(default)]
    pub entity_types: Vec<EntityTypeEntry>,
}

fn default_base_plugin_id() -> String {
    DEFAULT_BASE_PLUGIN_ID.to_string()
}

fn default_route_prefix() -> String {
    DEFAULT_ROUTE_PREFIX.to_string()
}

impl Manifest {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Self = serde_json::from_str(&raw).map_err(|source| CliError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            entity_types = manifest.entity_types.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    pub fn deriver(&self) -> LocalTaskDeriver {
        let registry: Arc<InMemoryEntityTypes> =
            Arc::new(self.entity_types.iter().cloned().collect());
        LocalTaskDeriver::new(
            DeriverConfig {
                base_plugin_id: self.base_plugin_id.clone(),
                route_prefix: self.route_prefix.clone(),
            },
            registry.clone(),
            registry,
            Arc::new(PassthroughTranslator),
        )
    }
}
