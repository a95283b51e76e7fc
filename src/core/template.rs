use std::sync::OnceLock;

use regex::Regex;

/// `{{TOKEN}}` placeholders: double braces around one or more of A-Z or
/// underscore. Compiled once for the whole process.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap())
}

/// One piece of a highlighted prompt rendering. `Value` spans came from
/// live user input; `Template` spans are the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpan {
    pub text: String,
    pub kind: SpanKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Template,
    Value,
}

impl PromptSpan {
    fn template(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SpanKind::Template }
    }

    fn value(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SpanKind::Value }
    }
}

/// Distinct token names in first-occurrence order.
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    for captures in token_pattern().captures_iter(text) {
        let name = &captures[1];
        if !vars.iter().any(|v| v == name) {
            vars.push(name.to_string());
        }
    }
    vars
}

/// "TECH_STACK" -> "Tech Stack"
pub fn humanize(token: &str) -> String {
    token
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn binding_value<'a>(bindings: &'a [(String, String)], token: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|(name, value)| name == token && !value.is_empty())
        .map(|(_, value)| value.as_str())
}

/// Plain-text rendering: every token with a non-empty binding is replaced
/// with the raw value, everything else stays literal. A single pass over
/// the original text, so replaced values are never re-scanned.
pub fn substitute(text: &str, bindings: &[(String, String)]) -> String {
    token_pattern()
        .replace_all(text, |captures: &regex::Captures| {
            match binding_value(bindings, &captures[1]) {
                Some(value) => value.to_string(),
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}

/// Same substitution semantics as [`substitute`], but the output is a span
/// list marking which stretches came from user input. With no bindings the
/// result is exactly one `Template` span of the original text.
pub fn highlight(text: &str, bindings: &[(String, String)]) -> Vec<PromptSpan> {
    let mut spans: Vec<PromptSpan> = Vec::new();
    let mut cursor = 0;

    for captures in token_pattern().captures_iter(text) {
        let matched = captures.get(0).unwrap();
        let Some(value) = binding_value(bindings, &captures[1]) else {
            continue;
        };
        if matched.start() > cursor {
            spans.push(PromptSpan::template(&text[cursor..matched.start()]));
        }
        spans.push(PromptSpan::value(value));
        cursor = matched.end();
    }

    if cursor < text.len() {
        spans.push(PromptSpan::template(&text[cursor..]));
    }

    spans
}
