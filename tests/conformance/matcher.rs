use super::common::{failure_summary, run, run_with};
use jazon::{
    Actual, ActualKind, Expectation, FailureKind, FailureMode, ListPolicy, Literal, MatchConfig,
    MatchResult, Matcher, Reason, Scalar,
};
use serde_json::{Number, json};
use std::collections::BTreeMap;

// ─── primitives and null ────────────────────────────────────────────────────

#[test]
fn kind_mismatch_reports_both_kinds() {
    let result = run("1", json!(1));
    assert_eq!(
        result.failures()[0].reason,
        Reason::KindMismatch {
            expected: ActualKind::String,
            actual: ActualKind::Number,
        }
    );
}

#[test]
fn value_mismatch_reports_both_values() {
    let result = run("a", json!("b"));
    assert_eq!(
        result.failures()[0].reason,
        Reason::ValueMismatch {
            expected: json!("a"),
            actual: json!("b"),
        }
    );
}

#[test]
fn null_matches_only_null() {
    assert!(run(Literal::Null, json!(null)).is_success());
    let result = run(Literal::Null, json!(0));
    assert_eq!(
        failure_summary(&result),
        vec![(String::new(), FailureKind::KindMismatch)]
    );
}

#[test]
fn large_integers_compare_exactly() {
    let big = i64::MAX;
    assert!(run(big, json!(big)).is_success());
    assert!(!run(big, json!(big - 1)).is_success());
    assert!(run(u64::MAX, json!(u64::MAX)).is_success());
    assert!(!run(-1, json!(u64::MAX)).is_success());
}

#[test]
fn integers_and_floats_compare_by_exact_value() {
    // 2^53 + 1 rounds to 2^53 as an f64 but is a different number.
    assert!(!run(9007199254740993i64, json!(9007199254740992.0)).is_success());
    assert!(run(9007199254740992i64, json!(9007199254740992.0)).is_success());
    assert!(!run(u64::MAX, json!(18446744073709551616.0)).is_success());
    assert!(!run(3, json!(3.5)).is_success());
    assert!(!run(3.5, json!(3)).is_success());
    assert!(run(-7.0, json!(-7)).is_success());
}

#[test]
fn floats_compare_without_tolerance() {
    assert!(run(0.5, json!(0.5)).is_success());
    assert!(!run(0.1 + 0.2, json!(0.3)).is_success());
    assert!(run(1, json!(1.0)).is_success());
}

// ─── object subset policy ───────────────────────────────────────────────────

#[test]
fn object_subset_tolerates_extra_keys() {
    assert!(run(Literal::map([("k", 1)]), json!({"k": 1, "extra": 2})).is_success());
}

#[test]
fn object_subset_still_requires_expected_keys() {
    let result = run(Literal::map([("k", 1)]), json!({"extra": 2}));
    assert_eq!(
        result.failures()[0].reason,
        Reason::MissingKey { key: "k".to_string() }
    );
    assert_eq!(result.failures()[0].path.to_string(), "/k");
}

#[test]
fn object_pattern_against_array_is_kind_mismatch() {
    let result = run(Literal::map([("k", 1)]), json!([1]));
    assert_eq!(
        failure_summary(&result),
        vec![(String::new(), FailureKind::KindMismatch)]
    );
}

// ─── ordered arrays ─────────────────────────────────────────────────────────

#[test]
fn ordered_array_matches_elementwise() {
    assert!(run(vec!["x", "y"], json!(["x", "y"])).is_success());
}

#[test]
fn ordered_array_swap_fails_at_first_index() {
    let result = run(vec!["x", "y"], json!(["y", "x"]));
    assert_eq!(
        failure_summary(&result),
        vec![("/0".to_string(), FailureKind::ValueMismatch)]
    );
}

#[test]
fn length_mismatch_reports_lengths() {
    let result = run(vec![1, 2, 3], json!([1, 2]));
    assert_eq!(
        result.failures()[0].reason,
        Reason::LengthMismatch {
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn all_failures_mode_walks_nested_structures() {
    let config = MatchConfig::default().with_failures(FailureMode::AllFailures);
    let pattern = Literal::from(json!({"a": [1, 2], "b": {"c": "x", "d": true}}));
    let result = run_with(config, pattern, json!({"a": [0, 0], "b": {"c": "y"}}));
    assert_eq!(
        failure_summary(&result),
        vec![
            ("/a/0".to_string(), FailureKind::ValueMismatch),
            ("/a/1".to_string(), FailureKind::ValueMismatch),
            ("/b/c".to_string(), FailureKind::ValueMismatch),
            ("/b/d".to_string(), FailureKind::MissingKey),
        ]
    );
}

#[test]
fn all_failures_mode_reports_keys_in_sorted_order() {
    let config = MatchConfig::default()
        .with_objects(jazon::ObjectPolicy::Exact)
        .with_failures(FailureMode::AllFailures);
    let pattern = Literal::map([("m", 1), ("b", 1)]);
    let actual: serde_json::Value =
        serde_json::from_str(r#"{"z": 0, "m": 0, "a": 0, "b": 0}"#).unwrap();
    assert_eq!(
        failure_summary(&run_with(config, pattern, actual)),
        vec![
            ("/b".to_string(), FailureKind::ValueMismatch),
            ("/m".to_string(), FailureKind::ValueMismatch),
            ("/a".to_string(), FailureKind::UnexpectedKey),
            ("/z".to_string(), FailureKind::UnexpectedKey),
        ]
    );
}

// ─── unordered arrays ───────────────────────────────────────────────────────

#[test]
fn unordered_array_is_permutation_invariant() {
    let pattern = Literal::set(["x", "y"]);
    assert!(run(pattern.clone(), json!(["x", "y"])).is_success());
    assert!(run(pattern, json!(["y", "x"])).is_success());
}

#[test]
fn unordered_array_requires_equal_length() {
    let result = run(Literal::set([1, 2]), json!([1, 2, 2]));
    assert_eq!(
        failure_summary(&result),
        vec![(String::new(), FailureKind::LengthMismatch)]
    );
}

#[test]
fn unordered_array_rejects_non_arrays() {
    let result = run(Literal::set([1]), json!({"0": 1}));
    assert_eq!(
        failure_summary(&result),
        vec![(String::new(), FailureKind::KindMismatch)]
    );
}

#[test]
fn unordered_array_needs_augmenting_path() {
    // Greedy pairing of the permissive predicate with element 0 leaves
    // expectation 1 unpaired; a perfect matching exists.
    let anything = Literal::predicate(|_| true);
    let pattern = Literal::Set(vec![anything, Literal::from(1)]);
    assert!(run(pattern, json!([1, 2])).is_success());
}

#[test]
fn unordered_array_reports_unpaired_positions() {
    let pattern = Literal::Set(vec![Literal::from(1), Literal::from(1), Literal::from(3)]);
    let result = run(pattern, json!([1, 2, 3]));
    assert_eq!(
        result.failures()[0].reason,
        Reason::NoMatchingPermutation {
            unmatched_expectations: vec![1],
            unmatched_elements: vec![1],
        }
    );
}

#[test]
fn unordered_array_of_objects_pairs_by_content() {
    let pattern = Literal::set([
        Literal::from(json!({"id": 1, "tag": "a"})),
        Literal::from(json!({"id": 2})),
    ]);
    let actual = json!([{"id": 2, "tag": "z"}, {"id": 1, "tag": "a"}]);
    assert!(run(pattern.clone(), actual).is_success());

    let actual = json!([{"id": 2}, {"id": 1, "tag": "b"}]);
    assert_eq!(
        failure_summary(&run(pattern, actual)),
        vec![(String::new(), FailureKind::NoMatchingPermutation)]
    );
}

#[test]
fn unordered_matching_handles_larger_arrays() {
    let n = 200;
    let actual: Vec<i64> = (0..n).rev().collect();
    assert!(run(Literal::set(0..n), json!(actual)).is_success());

    let config = MatchConfig::default().with_lists(ListPolicy::Unordered);
    assert!(run_with(config, Literal::list(0..n), json!(actual)).is_success());
    assert!(!run(Literal::list(0..n), json!(actual)).is_success());
}

// ─── direct tree construction ───────────────────────────────────────────────

#[test]
fn hand_built_trees_evaluate() {
    let mut fields = BTreeMap::new();
    fields.insert(
        "n".to_string(),
        Expectation::Primitive(Scalar::Number(Number::from(7))),
    );
    let expectation = Expectation::Object(jazon::ObjectExpectation {
        fields,
        policy: jazon::ObjectPolicy::Subset,
    });
    let matcher = Matcher::default();
    let actual = Actual::from(json!({"n": 7}));
    assert_eq!(matcher.evaluate(&expectation, &actual).unwrap(), MatchResult::Success);
    assert!(matcher.is_match(&expectation, &actual).unwrap());
    assert!(!matcher.is_match(&expectation, &Actual::from(json!({"n": 8}))).unwrap());
}

#[test]
fn trees_are_shareable_across_threads() {
    let expectation = std::sync::Arc::new(
        jazon::build(&Literal::map([
            ("id", Literal::predicate(|v| v.as_i64().is_some_and(|n| n >= 0))),
            ("tags", Literal::set(["a", "b"])),
        ]))
        .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let expectation = expectation.clone();
            std::thread::spawn(move || {
                let actual = Actual::from(json!({"id": i, "tags": ["b", "a"]}));
                jazon::evaluate(&expectation, &actual).unwrap().is_success()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn match_json_composes_build_and_evaluate() {
    let result = jazon::match_json(&Literal::map([("a", 1)]), &json!({"a": 1})).unwrap();
    assert!(result.is_success());

    let err = jazon::match_json(&Literal::unsupported::<std::fs::File>(), &json!(1)).unwrap_err();
    assert!(matches!(err, jazon::MatchError::Build(_)));
}

#[test]
fn assert_matches_passes_on_match() {
    jazon::assert_matches(&Literal::set([1, 2]), &json!([2, 1]));
}

#[test]
#[should_panic(expected = "/a")]
fn assert_matches_panics_with_report() {
    jazon::assert_matches(&Literal::map([("a", 1)]), &json!({"a": 2}));
}
