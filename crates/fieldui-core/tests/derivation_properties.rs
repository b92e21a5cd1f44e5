use std::sync::Arc;

use fieldui_core::collaborators::{EntityTypeEntry, InMemoryEntityTypes, PassthroughTranslator};
use fieldui_core::derivative::{DeriverConfig, LocalTaskDeriver};
use fieldui_core::models::{BasePluginDefinition, EntityTypeDescriptor};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct EntitySpec {
    fieldable: bool,
    admin_form: bool,
    form_modes: Vec<String>,
    view_modes: Vec<String>,
}

fn mode_ids() -> impl Strategy<Value = Vec<String>> {
    // "default" is excluded: it shares a key with the constant Default tab.
    btree_set("[a-z]{1,6}", 0..5).prop_map(|ids| {
        ids.into_iter()
            .filter(|id| id != "default")
            .collect::<Vec<_>>()
    })
}

fn entity_spec() -> impl Strategy<Value = EntitySpec> {
    (any::<bool>(), any::<bool>(), mode_ids(), mode_ids()).prop_map(
        |(fieldable, admin_form, form_modes, view_modes)| EntitySpec {
            fieldable,
            admin_form,
            form_modes,
            view_modes,
        },
    )
}

fn build(specs: &[EntitySpec]) -> (InMemoryEntityTypes, Vec<String>) {
    let mut registry = InMemoryEntityTypes::new();
    let mut qualifying = Vec::new();
    for (index, spec) in specs.iter().enumerate() {
        let id = format!("type{index}");
        let mut descriptor = EntityTypeDescriptor::new(&id).fieldable(spec.fieldable);
        if spec.admin_form {
            descriptor = descriptor.with_link_template("admin-form", format!("/admin/{id}"));
        }
        let mut entry = EntityTypeEntry::new(descriptor);
        for mode in &spec.form_modes {
            entry = entry.form_mode(mode, &mode.to_uppercase());
        }
        for mode in &spec.view_modes {
            entry = entry.view_mode(mode, &mode.to_uppercase());
        }
        registry.register(entry);
        if spec.fieldable && spec.admin_form {
            qualifying.push(id);
        }
    }
    (registry, qualifying)
}

fn deriver(registry: InMemoryEntityTypes) -> LocalTaskDeriver {
    let registry = Arc::new(registry);
    LocalTaskDeriver::new(
        DeriverConfig::default(),
        registry.clone(),
        registry,
        Arc::new(PassthroughTranslator),
    )
}

proptest! {
    #[test]
    fn overview_exists_exactly_for_qualifying_types(specs in vec(entity_spec(), 0..6)) {
        let (registry, qualifying) = build(&specs);
        let mut deriver = deriver(registry);
        let tasks = deriver.generate_tasks(&BasePluginDefinition::default()).unwrap();

        let overviews: Vec<&str> = tasks
            .ids()
            .filter_map(|id| id.strip_prefix("overview_"))
            .collect();
        prop_assert_eq!(overviews, qualifying.iter().map(String::as_str).collect::<Vec<_>>());

        for index in 0..specs.len() {
            let id = format!("type{index}");
            if !qualifying.contains(&id) {
                let suffix = format!("_{id}");
                prop_assert!(tasks.ids().all(|task| !task.ends_with(&suffix)));
            }
        }
    }

    #[test]
    fn mode_weights_are_positional(specs in vec(entity_spec(), 1..4)) {
        let (registry, qualifying) = build(&specs);
        let mut deriver = deriver(registry);
        let tasks = deriver.generate_tasks(&BasePluginDefinition::default()).unwrap();

        for (index, spec) in specs.iter().enumerate() {
            let id = format!("type{index}");
            if !qualifying.contains(&id) {
                continue;
            }
            for (position, mode) in spec.form_modes.iter().enumerate() {
                let task = tasks.get(&format!("field_form_display_{mode}_{id}")).unwrap();
                prop_assert_eq!(task.weight, Some(position as i32));
            }
            for (position, mode) in spec.view_modes.iter().enumerate() {
                let task = tasks.get(&format!("field_display_{mode}_{id}")).unwrap();
                prop_assert_eq!(task.weight, Some(position as i32));
            }
        }
    }

    #[test]
    fn generation_is_idempotent(specs in vec(entity_spec(), 0..5)) {
        let (registry, _) = build(&specs);
        let mut deriver = deriver(registry);
        let first = deriver.generate_tasks(&BasePluginDefinition::default()).unwrap();
        let second = deriver.generate_tasks(&BasePluginDefinition::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
