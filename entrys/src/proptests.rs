//! Property-based tests for key resolution and interpolation.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::document::{DocumentLoader, YamlLoader};
use crate::entry::Entry;
use crate::interpolate::Interpolator;
use crate::key::{KeyPath, KeyResolver};
use crate::value::Val;

// Keys and values prefixed with a letter so YAML never reads them as null
fn segment_strategy() -> impl Strategy<Value = String> {
    "k[a-z0-9_]{0,7}"
}

fn scalar_strategy() -> impl Strategy<Value = String> {
    "v[a-z0-9]{0,15}"
}

fn nested_yaml(segments: &[String], value: &str) -> String {
    let mut yaml = String::new();
    for (depth, segment) in segments.iter().enumerate() {
        yaml.push_str(&"  ".repeat(depth));
        yaml.push_str(segment);
        yaml.push(':');
        if depth + 1 == segments.len() {
            yaml.push(' ');
            yaml.push_str(value);
        }
        yaml.push('\n');
    }
    yaml
}

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Number-like scalars come back exactly as written
    #[test]
    fn numeric_scalar_keeps_literal_text(
        number in "[0-9]{1,3}\\.[0-9]{1,3}0|0x[0-9A-F]{1,4}|\\+[0-9]{1,5}|0[0-7]{1,4}"
    ) {
        let entry = Val::from_text("v", format!("v: {number}")).with_environment(no_env());
        prop_assert_eq!(entry.value().unwrap(), number);
    }

    // Text that is not a placeholder is returned unchanged
    #[test]
    fn plain_text_passes_through(text in "[a-zA-Z0-9 ./:_{}-]{0,40}") {
        let interpolator = Interpolator::with_environment(no_env());
        prop_assert_eq!(interpolator.resolve(&text).unwrap(), text);
    }

    // A nested key resolves to the value stored at its end
    #[test]
    fn nested_key_resolves(
        segments in prop::collection::vec(segment_strategy(), 1..6),
        value in scalar_strategy()
    ) {
        let yaml = nested_yaml(&segments, &value);
        let root = YamlLoader.parse(&yaml).unwrap();
        let path = KeyPath::parse(&segments.join(".")).unwrap();
        prop_assert_eq!(KeyResolver::resolve(&root, &path).unwrap(), Some(value));
    }

    // A key with an extra unknown segment at the end is missing
    #[test]
    fn absent_leaf_is_missing(
        segments in prop::collection::vec(segment_strategy(), 1..5),
        value in scalar_strategy()
    ) {
        let mut yaml_segments = segments.clone();
        yaml_segments.push("present".to_string());
        let yaml = nested_yaml(&yaml_segments, &value);

        let mut key = segments;
        key.push("absent".to_string());
        let entry = Val::from_text(key.join("."), yaml).with_environment(no_env());
        prop_assert!(entry.value().unwrap_err().is_missing());
    }

    // Sequences resolve to their items joined with ';'
    #[test]
    fn sequence_joins_with_semicolon(items in prop::collection::vec(scalar_strategy(), 0..8)) {
        let yaml = format!("items: [{}]", items.join(", "));
        let entry = Val::from_text("items", yaml).with_environment(no_env());
        prop_assert_eq!(entry.value().unwrap(), items.join(";"));
    }

    // Defaults keep every ':' after the first one
    #[test]
    fn default_is_kept_verbatim(
        name in "[A-Z][A-Z0-9_]{0,10}",
        default in "[a-zA-Z0-9:/.]{0,30}"
    ) {
        let interpolator = Interpolator::with_environment(no_env());
        let placeholder = format!("${{{name}:{default}}}");
        prop_assert_eq!(interpolator.resolve(&placeholder).unwrap(), default);
    }

    // A set variable wins over the default
    #[test]
    fn environment_overrides_default(
        name in "[A-Z][A-Z0-9_]{0,10}",
        value in "[a-zA-Z0-9]{1,20}",
        default in "[a-zA-Z0-9:/.]{0,30}"
    ) {
        let env = HashMap::from([(name.clone(), value.clone())]);
        let interpolator = Interpolator::with_environment(env);
        let placeholder = format!("${{{name}:{default}}}");
        prop_assert_eq!(interpolator.resolve(&placeholder).unwrap(), value);
    }

    // Resolving twice against the same text gives the same result
    #[test]
    fn resolution_is_idempotent(
        segments in prop::collection::vec(segment_strategy(), 1..4),
        value in scalar_strategy()
    ) {
        let entry = Val::from_text(segments.join("."), nested_yaml(&segments, &value))
            .with_environment(no_env());
        prop_assert_eq!(entry.value().unwrap(), entry.value().unwrap());
    }
}
