//! Deterministic prompt construction for the name-generation API.
//!
//! A generation request (category, count, free-form parameters) becomes a
//! single natural-language instruction string. Parameter phrasing is
//! driven by an explicit ordered rule table: each rule pairs a set of
//! field-name keywords with a renderer, rules are evaluated top to
//! bottom, and the first rule whose keyword matches the field name wins.
//! The same input always yields a byte-identical prompt.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Parameter values
// ---------------------------------------------------------------------------

/// A form parameter value, typed at the form boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Convert a JSON scalar into a typed parameter value.
    ///
    /// Form encodings send booleans and numbers as the literal strings
    /// `"true"`/`"false"` and numeric strings, so those are re-typed
    /// here; everything else stays free text. Non-scalar JSON is
    /// rejected by returning `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(ParamValue::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(ParamValue::Number),
            serde_json::Value::String(s) => match s.as_str() {
                "true" => Some(ParamValue::Bool(true)),
                "false" => Some(ParamValue::Bool(false)),
                other => {
                    if let Ok(n) = other.parse::<f64>() {
                        Some(ParamValue::Number(n))
                    } else {
                        Some(ParamValue::Text(other.to_string()))
                    }
                }
            },
            _ => None,
        }
    }

    /// Empty/falsy values contribute nothing to the prompt.
    fn is_skippable(&self) -> bool {
        match self {
            ParamValue::Bool(b) => !b,
            ParamValue::Number(n) => *n == 0.0,
            ParamValue::Text(s) => s.trim().is_empty(),
        }
    }
}

// ---------------------------------------------------------------------------
// Field-name humanization
// ---------------------------------------------------------------------------

/// Turn a form field name into readable copy.
///
/// Underscores become spaces, a space is inserted before internal
/// capitals, the result is lowercased, and only the first letter is
/// re-capitalized: `minLength` -> `Min length`, `brand_tone` -> `Brand tone`.
pub fn humanize_field(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c == '_' {
            out.push(' ');
        } else {
            if c.is_uppercase() && i > 0 {
                out.push(' ');
            }
            out.extend(c.to_lowercase());
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => out,
    }
}

// ---------------------------------------------------------------------------
// Text rule table
// ---------------------------------------------------------------------------

/// One phrasing rule: matches when the lowercased field name contains
/// any of `keywords`. `render` may return `None` to suppress the clause
/// entirely (the length rule does this for the value `any`).
struct TextRule {
    keywords: &'static [&'static str],
    render: fn(humanized: &str, value: &str) -> Option<String>,
}

/// The phrasing rules for text parameters, in precedence order.
///
/// The order is a contract: a field name matching several rules (for
/// example `theme_length`) always resolves to the first match, and that
/// behavior is pinned by tests. Do not reorder.
const TEXT_RULES: &[TextRule] = &[
    TextRule {
        keywords: &["keyword", "include"],
        render: |_, v| Some(format!("The names must include the keyword \"{v}\" exactly as it is.")),
    },
    TextRule {
        keywords: &["tone", "style"],
        render: |_, v| Some(format!("The tone/style of the names must be {v}.")),
    },
    TextRule {
        keywords: &["length", "size"],
        render: render_length,
    },
    TextRule {
        keywords: &["theme", "category"],
        render: |_, v| Some(format!("The names should follow the theme: {v}.")),
    },
    TextRule {
        keywords: &["prefix"],
        render: |_, v| Some(format!("The names must start with the prefix \"{v}\".")),
    },
    TextRule {
        keywords: &["suffix"],
        render: |_, v| Some(format!("The names must end with the suffix \"{v}\".")),
    },
    TextRule {
        keywords: &["avoid", "exclude"],
        render: |_, v| Some(format!("Avoid including anything related to: {v}.")),
    },
    TextRule {
        keywords: &["language", "origin"],
        render: |_, v| Some(format!("The names should have the following origin: {v}.")),
    },
    TextRule {
        keywords: &["gender"],
        render: |_, v| Some(format!("The names should be suitable for {v} gender.")),
    },
    TextRule {
        keywords: &["era", "period", "time"],
        render: |h, v| Some(format!("The names should be appropriate for the {h}: {v}.")),
    },
    TextRule {
        keywords: &["mood", "feeling"],
        render: |_, v| Some(format!("The names should convey a {v} mood/feeling.")),
    },
    TextRule {
        keywords: &["industry", "business", "niche"],
        render: |h, v| Some(format!("The names should be suitable for the {h}: {v}.")),
    },
];

/// Length fields bucket three well-known values and suppress `any`;
/// anything else falls through to the generic phrasing.
fn render_length(humanized: &str, value: &str) -> Option<String> {
    match value.to_lowercase().as_str() {
        "short" => Some("The names should be short (5-8 characters).".to_string()),
        "medium" => Some("The names should be medium length (8-12 characters).".to_string()),
        "long" => Some("The names should be long (12+ characters).".to_string()),
        "any" => None,
        _ => Some(render_generic(humanized, value)),
    }
}

fn render_generic(humanized: &str, value: &str) -> String {
    format!("Consider the {humanized}: {value}.")
}

// ---------------------------------------------------------------------------
// Prompt assembly
// ---------------------------------------------------------------------------

const PREAMBLE: &str =
    "You are a creative naming assistant that generates high-quality, original names.";

const OUTPUT_FORMAT: &str = "Output format requirements:\n\
    - Return only the names, one per line.\n\
    - Do not number the names.\n\
    - Do not use bullets, quotes, or any other formatting.\n\
    - Do not include explanations or commentary.\n\
    - Do not leave blank lines between names.";

/// Build the full instruction string for a generation request.
///
/// `params` must be in form-declaration order; ordering affects only the
/// phrasing of the prompt, never its correctness. The count must already
/// be validated (see [`crate::generation::validate_request`]).
pub fn construct_prompt(category: &str, count: u32, params: &[(String, ParamValue)]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(params.len() + 3);
    lines.push(PREAMBLE.to_string());
    lines.push(format!(
        "Generate exactly {count} creative and unique names for the category: \"{category}\"."
    ));

    for (field, value) in params {
        if value.is_skippable() {
            continue;
        }
        if let Some(clause) = render_param(field, value) {
            lines.push(clause);
        }
    }

    lines.push(OUTPUT_FORMAT.to_string());
    lines.join("\n")
}

/// Render one parameter into a prompt clause, or `None` when suppressed.
fn render_param(field: &str, value: &ParamValue) -> Option<String> {
    let humanized = humanize_field(field);
    match value {
        // Skippable false values never reach this point.
        ParamValue::Bool(_) => Some(format!("Enable {humanized}.")),
        ParamValue::Number(n) => Some(render_number(field, &humanized, *n)),
        ParamValue::Text(text) => {
            let name_lower = field.to_lowercase();
            for rule in TEXT_RULES {
                if rule.keywords.iter().any(|kw| name_lower.contains(kw)) {
                    return (rule.render)(&humanized, text);
                }
            }
            Some(render_generic(&humanized, text))
        }
    }
}

/// Numeric parameters phrase as minimum/maximum bounds when the field
/// name says so, otherwise generically.
fn render_number(field: &str, humanized: &str, n: f64) -> String {
    let name_lower = field.to_lowercase();
    let value = format_number(n);
    if name_lower.contains("min") {
        format!("Use a minimum {humanized} of {value}.")
    } else if name_lower.contains("max") {
        format!("Use a maximum {humanized} of {value}.")
    } else {
        render_generic(humanized, &value)
    }
}

/// Print whole numbers without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
