use super::common::{run, run_with};
use jazon::serialize::{to_json, to_yaml};
use jazon::{FailureMode, JsonPointer, Literal, MatchConfig, Report, Segment};
use serde_json::{Value, json};

fn two_failures() -> Report {
    let config = MatchConfig::default().with_failures(FailureMode::AllFailures);
    run_with(
        config,
        Literal::from(json!({"a": 1, "b": [true]})),
        json!({"a": "1", "b": [false]}),
    )
    .into_report()
}

#[test]
fn success_report_is_empty() {
    let report = run(1, json!(1)).into_report();
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "document matches the expectation");
}

#[test]
fn single_failure_report_is_one_line() {
    let report = run(Literal::map([("a", 1)]), json!({"a": 2})).into_report();
    assert_eq!(report.to_string(), "document does not match: /a: expected 1, found 2");
}

#[test]
fn root_failures_are_shown_as_dollar() {
    let report = run("x", json!(null)).into_report();
    assert_eq!(
        report.to_string(),
        "document does not match: $: expected string, found null"
    );
}

#[test]
fn multi_failure_report_numbers_each_failure() {
    let report = two_failures();
    assert_eq!(report.len(), 2);
    assert_eq!(
        report.to_string(),
        "document does not match (2 failures):\n  \
         1. /a: expected number, found string\n  \
         2. /b/0: expected true, found false"
    );
}

#[test]
fn reasons_render_concrete_values() {
    let report = run(Literal::map([("k", 1)]), json!({})).into_report();
    assert!(report.to_string().ends_with("missing key \"k\""));

    let report = run(vec![1], json!([])).into_report();
    assert!(report.to_string().contains("expected array of 1 element(s), found 0"));
}

#[test]
fn report_serializes_to_json() {
    let text = to_json(&two_failures()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        json!({
            "failures": [
                {"path": "/a", "reason": {"kind": "kind_mismatch", "expected": "number", "actual": "string"}},
                {"path": "/b/0", "reason": {"kind": "value_mismatch", "expected": true, "actual": false}},
            ]
        })
    );
}

#[test]
fn report_serializes_to_yaml() {
    let yaml = to_yaml(&two_failures()).unwrap();
    let back: Value = serde_saphyr::from_str(&yaml).unwrap();
    assert_eq!(back["failures"][0]["path"], json!("/a"));
    assert_eq!(back["failures"][1]["reason"]["kind"], json!("value_mismatch"));
}

#[test]
fn pointer_escapes_reserved_characters() {
    let pointer = JsonPointer::root().join_key("a/b").join_key("~c").join_index(3);
    assert_eq!(pointer.to_string(), "/a~1b/~0c/3");
    assert_eq!(
        pointer.segments(),
        &[
            Segment::Key("a/b".to_string()),
            Segment::Key("~c".to_string()),
            Segment::Index(3),
        ]
    );
    assert_eq!(JsonPointer::root().to_string(), "");
    assert_eq!(JsonPointer::root().describe(), "$");
}

#[test]
fn config_loads_from_yaml() {
    let config = MatchConfig::from_yaml("objects: exact\nfailures: all_failures\n").unwrap();
    assert_eq!(config.objects, jazon::ObjectPolicy::Exact);
    assert_eq!(config.lists, jazon::ListPolicy::Ordered);
    assert_eq!(config.failures, FailureMode::AllFailures);

    assert!(MatchConfig::from_yaml("objects: sloppy\n").is_err());
    assert!(MatchConfig::from_yaml("colour: blue\n").is_err());
}
