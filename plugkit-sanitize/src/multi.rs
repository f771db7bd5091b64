//! Allow-list sanitization of multi-value settings
//!
//! Multi-value controls (checkbox groups, multiselects) hand their state
//! over as a keyed bag, as a serialized text blob, or as a bare boolean
//! for a single checkbox. [`SettingInput`] keeps those shapes apart at the
//! type level, and [`sanitize_multiple_values`] returns the same variant it
//! was given.

use crate::text::sanitize_text_field;
use ahash::AHashSet;
use plugkit_values::{Bag, Limits, Value};

/// A multi-value setting as received from the host: the shape tag is part
/// of the contract, and the sanitized result mirrors it.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingInput {
    /// A keyed collection of values.
    Bag(Bag),
    /// A serialized (JSON, or legacy comma-separated) collection.
    Text(String),
    /// A bare boolean, e.g. a single checkbox.
    Flag(bool),
}

impl From<Bag> for SettingInput {
    fn from(bag: Bag) -> SettingInput {
        SettingInput::Bag(bag)
    }
}

impl From<bool> for SettingInput {
    fn from(flag: bool) -> SettingInput {
        SettingInput::Flag(flag)
    }
}

impl From<&str> for SettingInput {
    fn from(text: &str) -> SettingInput {
        SettingInput::Text(text.to_string())
    }
}

impl From<String> for SettingInput {
    fn from(text: String) -> SettingInput {
        SettingInput::Text(text)
    }
}

/// Keep only the entries whose key is named in `allowed`, sanitizing each
/// surviving value, and mirror the input shape on the way out.
///
/// `allowed` is a plain list of permitted key names. If it is associative,
/// or if the (normalized) values are not, nothing matches and the result
/// is empty in the input's shape. Booleans pass through untouched, and
/// boolean values inside the collection are serialized as the literal text
/// `"true"`/`"false"` so they survive a serialized round trip. Malformed
/// serialized input degrades to a comma split, never an error.
pub fn sanitize_multiple_values(values: SettingInput, allowed: &Bag) -> SettingInput {
    match values {
        SettingInput::Flag(flag) => SettingInput::Flag(flag),
        SettingInput::Bag(bag) => match filter_entries(&bag, allowed) {
            Some(kept) => SettingInput::Bag(kept),
            None => SettingInput::Bag(Bag::new()),
        },
        SettingInput::Text(text) => match filter_entries(&parse_serialized(&text), allowed) {
            Some(kept) => SettingInput::Text(kept.to_json_string()),
            None => SettingInput::Text(String::new()),
        },
    }
}

/// Filter `values` down to the allow-listed entries; `None` means the
/// shapes rule out any match.
fn filter_entries(values: &Bag, allowed: &Bag) -> Option<Bag> {
    if !values.is_associative() || allowed.is_associative() {
        tracing::debug!("value and allow-list shapes cannot match, returning an empty result");
        return None;
    }

    let names: AHashSet<String> = allowed
        .iter()
        .filter_map(|(_, value)| scalar_name(value))
        .collect();

    let mut kept = Bag::new();
    for (key, value) in values.iter() {
        if names.contains(&key.to_string()) {
            kept.insert(key.clone(), Value::Str(sanitize_text_field(&scalar_text(value))));
        }
    }

    Some(kept)
}

/// An allow-list entry's name, if it is scalar.
fn scalar_name(value: &Value) -> Option<String> {
    match value {
        Value::Str(text) => Some(text.clone()),
        Value::Int(number) => Some(number.to_string()),
        Value::Float(number) => Some(number.to_string()),
        Value::Bool(_) | Value::Null | Value::Bag(_) => None,
    }
}

/// Render a value as sanitizable text. Booleans keep their serialized
/// literal form; nested bags degrade to empty text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Str(text) => text.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Int(number) => number.to_string(),
        Value::Float(number) => number.to_string(),
        Value::Null | Value::Bag(_) => String::new(),
    }
}

/// Normalize serialized input: JSON first, comma split as the legacy
/// fallback.
fn parse_serialized(text: &str) -> Bag {
    match Bag::from_json_str(text, &Limits::default()) {
        Ok(bag) => bag,
        Err(error) => {
            tracing::debug!(%error, "settings value is not a JSON collection, splitting on commas");
            let mut bag = Bag::new();
            for part in text.split(',') {
                bag.push(Value::Str(part.to_string()));
            }
            bag
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugkit_values::Key;
    use serde_json::json;

    fn bag_of(value: serde_json::Value) -> Bag {
        Bag::from_json_value(value, &Limits::default()).unwrap()
    }

    fn abc_allowed() -> Bag {
        bag_of(json!(["a", "b", "c"]))
    }

    #[test]
    fn test_keeps_only_allow_listed_keys() {
        let values = bag_of(json!({
            "c": "cat",
            "3": "three",
            "a": "ant",
            "d": "dog",
            "b": "bee"
        }));

        let result = sanitize_multiple_values(values.into(), &abc_allowed());

        let expected = bag_of(json!({"a": "ant", "b": "bee", "c": "cat"}));
        assert_eq!(result, SettingInput::Bag(expected));
    }

    #[test]
    fn test_serialized_input_round_trips() {
        let text = serde_json::to_string(&json!({"a": "ant", "b": "bee", "c": "cat"})).unwrap();

        let result = sanitize_multiple_values(text.as_str().into(), &abc_allowed());

        assert_eq!(result, SettingInput::Text(text));
    }

    #[test]
    fn test_serialized_input_is_filtered_like_a_bag() {
        let text = serde_json::to_string(&json!({
            "c": "cat",
            "3": "three",
            "a": "ant",
            "d": "dog",
            "b": "bee"
        }))
        .unwrap();

        let result = sanitize_multiple_values(text.as_str().into(), &abc_allowed());

        let expected = bag_of(json!({"c": "cat", "a": "ant", "b": "bee"}));
        match result {
            SettingInput::Text(out) => {
                assert_eq!(
                    Bag::from_json_str(&out, &Limits::default()).unwrap(),
                    expected
                );
            }
            other => panic!("expected text back, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_overlap_keeps_input_order() {
        let values = bag_of(json!({"c": "cat", "3": "three", "b": "bee", "d": "dog"}));

        let result = sanitize_multiple_values(values.into(), &abc_allowed());

        match result {
            SettingInput::Bag(kept) => {
                let keys: Vec<String> = kept.keys().map(Key::to_string).collect();
                assert_eq!(keys, ["c", "b"]);
            }
            other => panic!("expected a bag back, got {other:?}"),
        }
    }

    #[test]
    fn test_associative_allow_list_matches_nothing() {
        let values = bag_of(json!({"c": "cat", "b": "bee"}));
        let allowed = bag_of(json!({"c": "cat", "b": "bee"}));

        let result = sanitize_multiple_values(values.into(), &allowed);

        assert_eq!(result, SettingInput::Bag(Bag::new()));
    }

    #[test]
    fn test_positional_values_match_nothing() {
        let values = bag_of(json!(["a", "b", "c"]));

        let result = sanitize_multiple_values(values.into(), &abc_allowed());

        assert_eq!(result, SettingInput::Bag(Bag::new()));
    }

    #[test]
    fn test_empty_result_for_text_input_keeps_text_shape() {
        let result = sanitize_multiple_values("[\"a\",\"b\"]".into(), &abc_allowed());

        assert_eq!(result, SettingInput::Text(String::new()));
    }

    #[test]
    fn test_bool_passes_through() {
        assert_eq!(
            sanitize_multiple_values(true.into(), &abc_allowed()),
            SettingInput::Flag(true)
        );
        assert_eq!(
            sanitize_multiple_values(false.into(), &abc_allowed()),
            SettingInput::Flag(false)
        );
    }

    #[test]
    fn test_bool_values_serialize_as_literals() {
        let values = bag_of(json!({"a": true, "b": false}));

        let result = sanitize_multiple_values(values.into(), &abc_allowed());

        let expected = bag_of(json!({"a": "true", "b": "false"}));
        assert_eq!(result, SettingInput::Bag(expected));
    }

    #[test]
    fn test_values_are_sanitized() {
        let values = bag_of(json!({"a": "<script>alert(1)</script>ant", "b": "  bee  "}));

        let result = sanitize_multiple_values(values.into(), &abc_allowed());

        let expected = bag_of(json!({"a": "ant", "b": "bee"}));
        assert_eq!(result, SettingInput::Bag(expected));
    }

    #[test]
    fn test_nested_values_degrade_to_empty_text() {
        let values = bag_of(json!({"a": {"deep": 1}, "b": "bee"}));

        let result = sanitize_multiple_values(values.into(), &abc_allowed());

        let expected = bag_of(json!({"a": "", "b": "bee"}));
        assert_eq!(result, SettingInput::Bag(expected));
    }

    #[test]
    fn test_malformed_serialized_input_degrades_to_empty_text() {
        // Comma splitting yields a positional bag, which the shape guard
        // then rules out.
        let result = sanitize_multiple_values("ant,bee,cat".into(), &abc_allowed());

        assert_eq!(result, SettingInput::Text(String::new()));
    }

    #[test]
    fn test_numeric_allow_list_names_match_positional_keys() {
        let values = bag_of(json!({"3": "three", "a": "ant"}));
        let allowed = bag_of(json!(["3"]));

        let result = sanitize_multiple_values(values.into(), &allowed);

        let expected = bag_of(json!({"3": "three"}));
        assert_eq!(result, SettingInput::Bag(expected));
    }
}
