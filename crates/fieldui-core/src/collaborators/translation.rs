#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TranslationOptions {
    pub langcode: Option<String>,
    pub context: Option<String>,
}

pub trait Translator: Send + Sync {
    /// Translates `source`, substituting `args` placeholders (`@name`,
    /// `%name`, `!name`).
    fn translate(
        &self,
        source: &str,
        args: &[(&str, &str)],
        options: &TranslationOptions,
    ) -> String;
}

/// Returns the source string untranslated, with placeholders substituted.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(
        &self,
        source: &str,
        args: &[(&str, &str)],
        _options: &TranslationOptions,
    ) -> String {
        format_placeholders(source, args)
    }
}

pub fn format_placeholders(source: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() {
        return source.to_string();
    }

    let mut replacements: Vec<(&str, String)> = args
        .iter()
        .map(|(placeholder, value)| (*placeholder, render_placeholder(placeholder, value)))
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .collect();
    // Longest first so `@name_full` is not clobbered by `@name`.
    replacements.sort_by(|left, right| right.0.len().cmp(&left.0.len()));

    let mut output = String::with_capacity(source.len());
    let mut rest = source;
    'scan: while let Some(next) = rest.chars().next() {
        for (placeholder, replacement) in &replacements {
            if let Some(tail) = rest.strip_prefix(placeholder) {
                output.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        output.push(next);
        rest = &rest[next.len_utf8()..];
    }
    output
}

fn render_placeholder(placeholder: &str, value: &str) -> String {
    match placeholder.chars().next() {
        Some('%') => format!("<em class=\"placeholder\">{}</em>", escape_html(value)),
        Some('!') => value.to_string(),
        _ => escape_html(value),
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
