use fieldui_core::models::LocalTaskSet;
use fieldui_core::registry;

use crate::error::CliResult;
use crate::manifest::Manifest;

/// Derives the manifest's local tasks keyed by plugin id, optionally pointing
/// their base routes at each entity type's admin form.
pub fn generate(manifest: &Manifest, patch_base_routes: bool) -> CliResult<LocalTaskSet> {
    let mut deriver = manifest.deriver();
    let derivatives = deriver.generate_tasks(&manifest.base_definition)?;
    let mut tasks = derivatives.qualified(&deriver.config().base_plugin_id);
    if patch_base_routes {
        deriver.patch_base_routes(&mut tasks)?;
    }
    Ok(tasks)
}

pub fn field_types(pretty: bool) -> CliResult<String> {
    render(registry::field_types(), pretty)
}

pub fn render<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> CliResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
