//! Property-based tests for the multi-value sanitizer

use plugkit_sanitize::{sanitize_multiple_values, SettingInput};
use plugkit_values::{Bag, Key, Value};
use proptest::prelude::*;

fn named_bag_strategy() -> impl Strategy<Value = Bag> {
    prop::collection::vec(
        (
            "[a-z]{1,6}",
            prop_oneof![
                "[a-z ]{0,8}".prop_map(Value::Str),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(Value::Int),
            ],
        ),
        1..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, value)| (Key::Named(name), value))
            .collect()
    })
}

fn allow_list_strategy() -> impl Strategy<Value = Bag> {
    prop::collection::vec("[a-z]{1,6}", 0..8).prop_map(|names| {
        let mut bag = Bag::new();
        for name in names {
            bag.push(Value::Str(name));
        }
        bag
    })
}

fn allowed_names(allowed: &Bag) -> Vec<String> {
    allowed
        .iter()
        .filter_map(|(_, value)| match value {
            Value::Str(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn bag_in_bag_out(values in named_bag_strategy(), allowed in allow_list_strategy()) {
        let result = sanitize_multiple_values(values.into(), &allowed);
        prop_assert!(matches!(result, SettingInput::Bag(_)));
    }

    #[test]
    fn text_in_text_out(text in "[a-z,{}\\[\\]\": ]{0,40}", allowed in allow_list_strategy()) {
        let result = sanitize_multiple_values(text.as_str().into(), &allowed);
        prop_assert!(matches!(result, SettingInput::Text(_)));
    }

    #[test]
    fn flag_in_flag_out(flag in any::<bool>(), allowed in allow_list_strategy()) {
        let result = sanitize_multiple_values(flag.into(), &allowed);
        prop_assert_eq!(result, SettingInput::Flag(flag));
    }

    #[test]
    fn every_result_key_is_allow_listed(
        values in named_bag_strategy(),
        allowed in allow_list_strategy()
    ) {
        let names = allowed_names(&allowed);

        match sanitize_multiple_values(values.into(), &allowed) {
            SettingInput::Bag(kept) => {
                for key in kept.keys() {
                    prop_assert!(names.contains(&key.to_string()));
                }
            }
            other => prop_assert!(false, "expected a bag back, got {other:?}"),
        }
    }

    #[test]
    fn no_common_key_is_dropped(
        values in named_bag_strategy(),
        allowed in allow_list_strategy()
    ) {
        let names = allowed_names(&allowed);

        match sanitize_multiple_values(values.clone().into(), &allowed) {
            SettingInput::Bag(kept) => {
                for key in values.keys() {
                    if names.contains(&key.to_string()) {
                        prop_assert!(kept.contains_key(key), "lost key {key}");
                    }
                }
            }
            other => prop_assert!(false, "expected a bag back, got {other:?}"),
        }
    }

    #[test]
    fn result_values_are_plain_text(
        values in named_bag_strategy(),
        allowed in allow_list_strategy()
    ) {
        match sanitize_multiple_values(values.into(), &allowed) {
            SettingInput::Bag(kept) => {
                for (_, value) in kept.iter() {
                    prop_assert!(matches!(value, Value::Str(_)));
                }
            }
            other => prop_assert!(false, "expected a bag back, got {other:?}"),
        }
    }
}
