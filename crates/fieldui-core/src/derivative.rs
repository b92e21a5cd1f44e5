use std::sync::Arc;

use crate::collaborators::{EntityTypeRegistry, ModeProvider, TranslationOptions, Translator};
use crate::models::{
    ADMIN_FORM_LINK, BasePluginDefinition, CoreResult, DisplayModeKind, EntityTypeDescriptor,
    LocalTaskRecord, LocalTaskSet, plugin_id,
};

pub const DEFAULT_BASE_PLUGIN_ID: &str = "field_ui.fields";
pub const DEFAULT_ROUTE_PREFIX: &str = "field_ui.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeriverConfig {
    /// Id of the plugin the derived tasks hang off; derived tasks register as
    /// `<base_plugin_id>:<derivative_id>`.
    pub base_plugin_id: String,
    pub route_prefix: String,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            base_plugin_id: DEFAULT_BASE_PLUGIN_ID.to_string(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }
}

/// Derives the field UI tabs ("Manage fields", "Manage display", per-mode
/// secondary tabs, ...) for every fieldable entity type with an admin form.
pub struct LocalTaskDeriver {
    config: DeriverConfig,
    entity_types: Arc<dyn EntityTypeRegistry>,
    modes: Arc<dyn ModeProvider>,
    translator: Arc<dyn Translator>,
    derivatives: LocalTaskSet,
}

impl LocalTaskDeriver {
    pub fn new(
        config: DeriverConfig,
        entity_types: Arc<dyn EntityTypeRegistry>,
        modes: Arc<dyn ModeProvider>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            config,
            entity_types,
            modes,
            translator,
            derivatives: LocalTaskSet::new(),
        }
    }

    pub fn config(&self) -> &DeriverConfig {
        &self.config
    }

    /// Tasks produced by the last call to [`Self::generate_tasks`].
    pub fn derivatives(&self) -> &LocalTaskSet {
        &self.derivatives
    }

    pub fn derivative(&self, derivative_id: &str) -> Option<&LocalTaskRecord> {
        self.derivatives.get(derivative_id)
    }

    /// Rebuilds the task set from the current registry, keyed by derivative
    /// id, and merges `base_definition` into every task.
    pub fn generate_tasks(
        &mut self,
        base_definition: &BasePluginDefinition,
    ) -> CoreResult<LocalTaskSet> {
        self.derivatives.clear();

        for entity_type in self.entity_types.definitions()? {
            if !entity_type.has_field_ui() {
                tracing::debug!(
                    entity_type = %entity_type.id,
                    fieldable = entity_type.is_fieldable(),
                    "skipping entity type without field UI"
                );
                continue;
            }
            self.derive_entity_type(&entity_type)?;
        }

        for (_, record) in self.derivatives.iter_mut() {
            record.merge_defaults(base_definition);
        }

        tracing::info!(
            base_plugin_id = %self.config.base_plugin_id,
            tasks = self.derivatives.len(),
            "derived field UI local tasks"
        );
        Ok(self.derivatives.clone())
    }

    /// Points the primary field UI tabs of every entity type at the entity
    /// type's admin form route. `local_tasks` may be keyed by plugin id or by
    /// derivative id, as returned from [`Self::generate_tasks`]; ids not
    /// present are skipped.
    pub fn patch_base_routes(&self, local_tasks: &mut LocalTaskSet) -> CoreResult<()> {
        for entity_type in self.entity_types.definitions()? {
            if !entity_type.has_field_ui() {
                continue;
            }
            let Some(admin_form) = entity_type.link_template(ADMIN_FORM_LINK) else {
                continue;
            };

            let id = entity_type.id.as_str();
            let mut derivative_ids = vec![
                format!("overview_{id}"),
                format!("form_display_overview_{id}"),
                format!("display_overview_{id}"),
                format!("field_form_display_default_{id}"),
                format!("field_display_default_{id}"),
            ];
            for kind in [DisplayModeKind::Form, DisplayModeKind::View] {
                for mode in self.modes.modes(kind, id)? {
                    derivative_ids.push(mode_derivative_id(kind, &mode.id, id));
                }
            }

            let mut patched = 0usize;
            for derivative_id in derivative_ids {
                let task_id = plugin_id(&self.config.base_plugin_id, &derivative_id);
                // Registered sets use plugin ids, raw generator output uses
                // derivative ids.
                let key = if local_tasks.contains(&task_id) {
                    task_id
                } else {
                    derivative_id
                };
                if let Some(task) = local_tasks.get_mut(&key) {
                    task.base_route = Some(admin_form.to_string());
                    patched += 1;
                }
            }
            tracing::debug!(
                entity_type = %id,
                admin_form = %admin_form,
                patched,
                "patched field UI base routes"
            );
        }
        Ok(())
    }

    fn derive_entity_type(&mut self, entity_type: &EntityTypeDescriptor) -> CoreResult<()> {
        let id = entity_type.id.as_str();
        let form_display_parent = self.plugin_id(&format!("form_display_overview_{id}"));
        let display_parent = self.plugin_id(&format!("display_overview_{id}"));

        for (derivative_id, record) in self.primary_tabs(id, &form_display_parent, &display_parent)
        {
            self.derivatives.insert(derivative_id, record);
        }
        self.derive_mode_tabs(DisplayModeKind::Form, id, &form_display_parent)?;
        self.derive_mode_tabs(DisplayModeKind::View, id, &display_parent)?;

        tracing::debug!(entity_type = %id, "derived field UI tabs");
        Ok(())
    }

    fn primary_tabs(
        &self,
        id: &str,
        form_display_parent: &str,
        display_parent: &str,
    ) -> [(String, LocalTaskRecord); 7] {
        let overview_route = self.route(&format!("overview_{id}"));
        let form_display_route = self.route(&format!("form_display_overview_{id}"));
        let display_route = self.route(&format!("display_overview_{id}"));
        let instance_edit_route = self.route(&format!("instance_edit_{id}"));
        let field_edit_route = self.route(&format!("field_edit_{id}"));

        [
            (
                format!("overview_{id}"),
                LocalTaskRecord::new(overview_route.clone(), self.t("Manage fields"))
                    .weight(1)
                    .base_route(overview_route.clone()),
            ),
            (
                format!("form_display_overview_{id}"),
                LocalTaskRecord::new(form_display_route.clone(), self.t("Manage form display"))
                    .weight(2)
                    .base_route(overview_route.clone()),
            ),
            (
                format!("display_overview_{id}"),
                LocalTaskRecord::new(display_route.clone(), self.t("Manage display"))
                    .weight(3)
                    .base_route(overview_route),
            ),
            (
                format!("instance_edit_{id}"),
                LocalTaskRecord::new(instance_edit_route.clone(), self.t("Edit"))
                    .base_route(instance_edit_route.clone()),
            ),
            (
                format!("field_edit_{id}"),
                LocalTaskRecord::new(field_edit_route, self.t("Field settings"))
                    .base_route(instance_edit_route),
            ),
            // Every bundle shares these routes, but each bundle enables its
            // own subset of modes; route requirements hide the disabled ones.
            (
                format!("field_form_display_default_{id}"),
                LocalTaskRecord::new(form_display_route, "Default")
                    .parent(form_display_parent)
                    .weight(-1),
            ),
            (
                format!("field_display_default_{id}"),
                LocalTaskRecord::new(display_route, "Default")
                    .parent(display_parent)
                    .weight(-1),
            ),
        ]
    }

    fn derive_mode_tabs(
        &mut self,
        kind: DisplayModeKind,
        entity_type_id: &str,
        parent_id: &str,
    ) -> CoreResult<()> {
        let route_name = match kind {
            DisplayModeKind::Form => {
                self.route(&format!("form_display_overview_form_mode_{entity_type_id}"))
            }
            DisplayModeKind::View => {
                self.route(&format!("display_overview_view_mode_{entity_type_id}"))
            }
        };

        let modes = self.modes.modes(kind, entity_type_id)?;
        tracing::trace!(
            entity_type = %entity_type_id,
            kind = kind.as_str(),
            modes = modes.len(),
            "deriving mode tabs"
        );
        for (weight, mode) in (0i32..).zip(modes) {
            self.derivatives.insert(
                mode_derivative_id(kind, &mode.id, entity_type_id),
                LocalTaskRecord::new(route_name.clone(), mode.label)
                    .route_parameter(kind.route_parameter(), mode.id)
                    .parent(parent_id)
                    .weight(weight),
            );
        }
        Ok(())
    }

    fn route(&self, name: &str) -> String {
        format!("{}{name}", self.config.route_prefix)
    }

    fn plugin_id(&self, derivative_id: &str) -> String {
        plugin_id(&self.config.base_plugin_id, derivative_id)
    }

    fn t(&self, source: &str) -> String {
        self.translator
            .translate(source, &[], &TranslationOptions::default())
    }
}

pub fn mode_derivative_id(kind: DisplayModeKind, mode_id: &str, entity_type_id: &str) -> String {
    match kind {
        DisplayModeKind::Form => format!("field_form_display_{mode_id}_{entity_type_id}"),
        DisplayModeKind::View => format!("field_display_{mode_id}_{entity_type_id}"),
    }
}
