//! Defensive normalization of raw block prop bags.
//!
//! Props arrive from the content layer with missing values, stringified
//! JSON and leftover fields from variant switches. Sanitization never
//! raises; ambiguous data degrades to a safe default. The name-based
//! defaulting heuristic lives behind this single function so it can be
//! swapped for a per-block-type schema later without touching callers.

use serde_json::Value;

use crate::site::Props;

/// Key-name substrings that default an absent value to an empty string.
const TEXT_HINTS: [&str; 3] = ["title", "text", "description"];

/// Key-name substrings that default an absent value to an empty list.
const LIST_HINTS: [&str; 3] = ["items", "list", "fields"];

/// Normalizes a raw prop bag for the given block type.
///
/// Pure and idempotent: `sanitize_props(t, &sanitize_props(t, x))` equals
/// `sanitize_props(t, x)` for any input. Rules, per key:
///
/// 1. Absent (null) value whose key name carries a text hint → `""`.
/// 2. Absent value whose key name carries a list hint → `[]`.
/// 3. Absent value with no hint → the key is dropped.
/// 4. A string that looks like a JSON object or array is parsed into a
///    structured value; on parse failure the string is left untouched.
/// 5. Per-block-type overrides, see [`apply_type_overrides`].
pub fn sanitize_props(block_type: &str, raw: &Props) -> Props {
    let mut cleaned = Props::new();

    for (key, value) in raw {
        match value {
            Value::Null => {
                if has_hint(key, &TEXT_HINTS) {
                    cleaned.insert(key.clone(), Value::String(String::new()));
                } else if has_hint(key, &LIST_HINTS) {
                    cleaned.insert(key.clone(), Value::Array(Vec::new()));
                }
                // No hint: the key is dropped.
            }
            Value::String(s) if looks_like_json(s) => {
                let parsed = serde_json::from_str::<Value>(s).unwrap_or_else(|_| value.clone());
                cleaned.insert(key.clone(), parsed);
            }
            other => {
                cleaned.insert(key.clone(), other.clone());
            }
        }
    }

    apply_type_overrides(block_type, &mut cleaned);
    cleaned
}

fn has_hint(key: &str, hints: &[&str]) -> bool {
    let key = key.to_ascii_lowercase();
    hints.iter().any(|hint| key.contains(hint))
}

fn looks_like_json(s: &str) -> bool {
    s.starts_with('{') || s.starts_with('[')
}

/// Block-type-specific corrections applied after the generic rules.
///
/// A `content` block in its `timeline` variant renders entries only and
/// must not carry a free-text body; the `text-image` variant requires the
/// body to exist as a string.
fn apply_type_overrides(block_type: &str, props: &mut Props) {
    if block_type != "content" {
        return;
    }
    match props.get("variant").and_then(Value::as_str) {
        Some("timeline") => {
            props.remove("content");
        }
        Some("text-image") => match props.get("content") {
            Some(Value::String(_)) => {}
            _ => {
                props.insert("content".to_string(), Value::String(String::new()));
            }
        },
        _ => {}
    }
}
