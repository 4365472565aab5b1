//! Content personalization: business-data token substitution.
//!
//! Seed props produced by the template selector (and enriched copy from
//! the content layer) carry `{{token}}` placeholders. This pass walks a
//! props tree and substitutes every recognized token with the matching
//! business fact, or an empty string when the fact is absent. Unmatched
//! tokens are left as-is so the pass stays total; nothing is removed and
//! nothing can fail.

use serde_json::Value;

use crate::site::{BusinessInfo, Props};

/// Tokens recognized inside string prop values.
pub const RECOGNIZED_TOKENS: [&str; 7] = [
    "businessName",
    "businessType",
    "city",
    "phone",
    "email",
    "address",
    "tagline",
];

fn token_value<'a>(token: &str, business: &'a BusinessInfo) -> Option<&'a str> {
    match token {
        "businessName" => business.name.as_deref(),
        "businessType" => business.business_type.as_deref(),
        "city" => business.city.as_deref(),
        "phone" => business.phone.as_deref(),
        "email" => business.email.as_deref(),
        "address" => business.address.as_deref(),
        "tagline" => business.tagline.as_deref(),
        _ => None,
    }
}

/// Substitutes all occurrences of recognized tokens in one string.
pub fn personalize_str(s: &str, business: &BusinessInfo) -> String {
    if !s.contains("{{") {
        return s.to_string();
    }
    let mut out = s.to_string();
    for token in RECOGNIZED_TOKENS {
        let needle = format!("{{{{{token}}}}}");
        if out.contains(&needle) {
            out = out.replace(&needle, token_value(token, business).unwrap_or(""));
        }
    }
    out
}

/// Structure-preserving deep walk over one prop value.
///
/// Strings are substituted, arrays and objects are walked recursively,
/// non-string leaves pass through unchanged.
pub fn personalize_value(value: &Value, business: &BusinessInfo) -> Value {
    match value {
        Value::String(s) => Value::String(personalize_str(s, business)),
        Value::Array(entries) => Value::Array(
            entries
                .iter()
                .map(|entry| personalize_value(entry, business))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, entry)| (key.clone(), personalize_value(entry, business)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Personalizes a whole prop bag, producing a new map.
pub fn personalize_props(props: &Props, business: &BusinessInfo) -> Props {
    props
        .iter()
        .map(|(key, value)| (key.clone(), personalize_value(value, business)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn business() -> BusinessInfo {
        BusinessInfo {
            name: Some("Acme".to_string()),
            city: Some("Lyon".to_string()),
            phone: Some("01 02 03 04 05".to_string()),
            ..BusinessInfo::default()
        }
    }

    #[test]
    fn test_substitutes_known_tokens() {
        assert_eq!(
            personalize_str("{{businessName}} in {{city}}", &business()),
            "Acme in Lyon"
        );
    }

    #[test]
    fn test_unknown_token_left_untouched() {
        assert_eq!(
            personalize_str("{{unknown}}", &BusinessInfo::default()),
            "{{unknown}}"
        );
    }

    #[test]
    fn test_absent_field_substitutes_empty() {
        assert_eq!(personalize_str("Chez {{tagline}}!", &business()), "Chez !");
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(
            personalize_str("{{city}}, toujours {{city}}", &business()),
            "Lyon, toujours Lyon"
        );
    }

    #[test]
    fn test_deep_walk_preserves_structure() {
        let value = json!({
            "title": "Bienvenue chez {{businessName}}",
            "items": [
                {"label": "Appelez le {{phone}}", "weight": 3},
                "{{city}}"
            ],
            "visible": true
        });

        let result = personalize_value(&value, &business());

        assert_eq!(
            result,
            json!({
                "title": "Bienvenue chez Acme",
                "items": [
                    {"label": "Appelez le 01 02 03 04 05", "weight": 3},
                    "Lyon"
                ],
                "visible": true
            })
        );
    }

    #[test]
    fn test_non_string_leaves_pass_through() {
        let value = json!(42);
        assert_eq!(personalize_value(&value, &business()), json!(42));
    }

    #[test]
    fn test_props_map_round_trip() {
        let props = json!({"title": "{{businessName}}"}).as_object().cloned().unwrap();
        let result = personalize_props(&props, &business());
        assert_eq!(result["title"], json!("Acme"));
    }
}
