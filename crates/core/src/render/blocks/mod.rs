//! Built-in block renderers.
//!
//! Each renderer is a pure function of the render context and a
//! sanitized prop bag, producing one namespaced HTML/CSS/JS fragment.
//! Renderers are defensive by contract: any prop may be absent or have
//! the wrong shape, and the fragment must still come out usable.

pub(crate) mod contact;
pub(crate) mod content;
pub(crate) mod cta;
pub(crate) mod faq;
pub(crate) mod features;
pub(crate) mod gallery;
pub(crate) mod hero;
pub(crate) mod layout;
pub(crate) mod pricing;
pub(crate) mod services;
pub(crate) mod testimonials;

use serde_json::Value;

use super::escape_html;
use crate::site::Props;

/// Escaped string prop; empty when absent or not a string.
fn text(props: &Props, key: &str) -> String {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(escape_html)
        .unwrap_or_default()
}

/// Escaped string prop with a fallback for absent or empty values.
fn text_or(props: &Props, key: &str, fallback: &str) -> String {
    match props.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => escape_html(s),
        _ => escape_html(fallback),
    }
}

/// Array prop; empty slice when absent or not an array.
fn items<'a>(props: &'a Props, key: &str) -> &'a [Value] {
    props
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Escaped string field of one list item. Plain strings are treated as
/// the field itself so `["Dépannage", …]` and `[{"title": …}, …]` both
/// work.
fn item_text(item: &Value, key: &str) -> String {
    match item {
        Value::String(s) => escape_html(s),
        _ => item
            .get(key)
            .and_then(Value::as_str)
            .map(escape_html)
            .unwrap_or_default(),
    }
}

/// The block's variant tag, `default` when unset.
fn variant(props: &Props) -> String {
    escape_html(
        props
            .get("variant")
            .and_then(Value::as_str)
            .unwrap_or("default"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_helpers() {
        let p = props(json!({"title": "Nos <b>services</b>", "n": 4}));

        assert_eq!(text(&p, "title"), "Nos &lt;b&gt;services&lt;/b&gt;");
        assert_eq!(text(&p, "missing"), "");
        assert_eq!(text(&p, "n"), "");
        assert_eq!(text_or(&p, "missing", "fallback"), "fallback");
        assert_eq!(text_or(&p, "title", "fallback"), "Nos &lt;b&gt;services&lt;/b&gt;");
    }

    #[test]
    fn test_item_text_accepts_plain_strings() {
        assert_eq!(item_text(&json!("Dépannage"), "title"), "Dépannage");
        assert_eq!(item_text(&json!({"title": "Dépannage"}), "title"), "Dépannage");
        assert_eq!(item_text(&json!(42), "title"), "");
    }

    #[test]
    fn test_variant_default() {
        assert_eq!(variant(&props(json!({}))), "default");
        assert_eq!(variant(&props(json!({"variant": "emergency"}))), "emergency");
    }
}
