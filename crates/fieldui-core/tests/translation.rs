use fieldui_core::collaborators::translation::format_placeholders;
use fieldui_core::collaborators::{PassthroughTranslator, TranslationOptions, Translator};

#[test]
fn passthrough_returns_source_without_args() {
    let translated =
        PassthroughTranslator.translate("Manage fields", &[], &TranslationOptions::default());
    assert_eq!(translated, "Manage fields");
}

#[test]
fn placeholders_are_escaped_by_prefix() {
    let formatted = format_placeholders(
        "@plain %em !raw",
        &[("@plain", "<b>"), ("%em", "a&b"), ("!raw", "<i>")],
    );
    assert_eq!(
        formatted,
        "&lt;b&gt; <em class=\"placeholder\">a&amp;b</em> <i>"
    );
}

#[test]
fn longer_placeholders_win_over_prefixes() {
    let formatted = format_placeholders(
        "@name / @name_full",
        &[("@name", "Ada"), ("@name_full", "Ada Lovelace")],
    );
    assert_eq!(formatted, "Ada / Ada Lovelace");
}

#[test]
fn options_do_not_affect_passthrough() {
    let options = TranslationOptions {
        langcode: Some("de".to_string()),
        context: Some("Field UI".to_string()),
    };
    let translated =
        PassthroughTranslator.translate("Edit @label", &[("@label", "Tags")], &options);
    assert_eq!(translated, "Edit Tags");
}
