//! Property tests for parameter reconciliation.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

use stackctl::domain::entities::PreviousParameters;
use stackctl::{reconcile, ParameterOverrides, ReconciledParameter};

fn key() -> impl Strategy<Value = String> {
    // Small alphabet so declared, override and stored keys overlap often
    proptest::string::string_regex("[A-F][a-c]?").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{0,6}").unwrap()
}

fn inputs() -> impl Strategy<Value = (Vec<String>, Vec<(String, String)>, PreviousParameters)> {
    (
        proptest::collection::vec(key(), 0..8),
        proptest::collection::vec((key(), value()), 0..8),
        proptest::collection::btree_map(key(), value(), 0..8),
    )
}

fn unique_in_order(keys: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every override is sent as an explicit value, last write wins.
    #[test]
    fn property_overrides_always_win(
        (declared, pairs, previous) in inputs()
    ) {
        let overrides = ParameterOverrides::from_pairs(pairs.clone());
        let result = reconcile(&declared, &overrides, &previous);

        let last: BTreeMap<String, String> = pairs.into_iter().collect();
        for (k, v) in &last {
            let expected = ReconciledParameter::Value { key: k.clone(), value: v.clone() };
            let entry = result.iter().find(|p| p.key() == k);
            prop_assert_eq!(entry, Some(&expected));
        }
    }

    /// PROPERTY: a declared key without override reuses the stored value if
    /// there is one, and is omitted otherwise.
    #[test]
    fn property_declared_keys_fall_back_to_previous(
        (declared, pairs, previous) in inputs()
    ) {
        let overrides = ParameterOverrides::from_pairs(pairs);
        let result = reconcile(&declared, &overrides, &previous);

        for k in declared.iter().filter(|k| overrides.get(k).is_none()) {
            let entry = result.iter().find(|p| p.key() == k.as_str());
            if previous.contains_key(k) {
                let expected = ReconciledParameter::UsePrevious { key: k.clone() };
                prop_assert_eq!(entry, Some(&expected));
            } else {
                prop_assert!(entry.is_none(), "{} should be omitted", k);
            }
        }
    }

    /// PROPERTY: keys are unique and ordered declared-first, then override-only.
    #[test]
    fn property_key_order_is_stable(
        (declared, pairs, previous) in inputs()
    ) {
        let overrides = ParameterOverrides::from_pairs(pairs);
        let result = reconcile(&declared, &overrides, &previous);

        let expected: Vec<String> = unique_in_order(
            declared
                .iter()
                .cloned()
                .chain(overrides.iter().map(|(k, _)| k.to_string())),
        )
        .into_iter()
        .filter(|k| overrides.get(k).is_some() || previous.contains_key(k))
        .collect();

        let actual: Vec<String> = result.iter().map(|p| p.key().to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: with no stored values (a create), nothing references "previous".
    #[test]
    fn property_empty_previous_never_uses_previous(
        (declared, pairs, _previous) in inputs()
    ) {
        let overrides = ParameterOverrides::from_pairs(pairs);
        let result = reconcile(&declared, &overrides, &PreviousParameters::new());

        prop_assert!(result.iter().all(|p| !p.uses_previous()));
        prop_assert_eq!(result.len(), overrides.len());
    }
}
