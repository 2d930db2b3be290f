#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jazon::{
    Actual, DefaultExpectationFactory, ExpectationFactory, FailureMode, ListPolicy, Literal,
    MatchConfig, Matcher, ObjectPolicy,
};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

/// Generate an arbitrary JSON value from fuzzer bytes, bounded in depth.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let max = if depth == 0 { 3 } else { 5 };
    match u.int_in_range(0..=max)? {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => {
            let n = f64::arbitrary(u)?;
            Ok(serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null))
        }
        3 => Ok(Value::String(String::arbitrary(u)?)),
        4 => {
            let len = u.int_in_range(0..=4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Array(items))
        }
        _ => {
            let len = u.int_in_range(0..=4)?;
            let mut map = serde_json::Map::new();
            for _ in 0..len {
                map.insert(String::arbitrary(u)?, arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Object(map))
        }
    }
}

fn arbitrary_config(u: &mut Unstructured<'_>) -> arbitrary::Result<MatchConfig> {
    let objects = if bool::arbitrary(u)? { ObjectPolicy::Exact } else { ObjectPolicy::Subset };
    let lists = if bool::arbitrary(u)? { ListPolicy::Unordered } else { ListPolicy::Ordered };
    let failures = if bool::arbitrary(u)? { FailureMode::AllFailures } else { FailureMode::FirstFailure };
    Ok(MatchConfig { objects, lists, failures })
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let (config, pattern, actual) = match (
        arbitrary_config(&mut u),
        arbitrary_value(&mut u, 3),
        arbitrary_value(&mut u, 3),
    ) {
        (Ok(c), Ok(p), Ok(a)) => (c, p, a),
        _ => return,
    };

    let expectation = DefaultExpectationFactory::new(config)
        .expectation(&Literal::from(pattern.clone()))
        .expect("JSON literals always build");
    let matcher = Matcher::new(config);
    let result = matcher
        .evaluate(&expectation, &Actual::from(actual))
        .expect("no predicates present");
    let _ = result.into_report().to_string();

    // Reflexivity must hold for every generated pattern.
    let own = matcher
        .evaluate(&expectation, &Actual::from(pattern))
        .expect("no predicates present");
    assert!(own.is_success());
});
