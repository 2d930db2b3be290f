#![no_main]

use jazon::{Literal, Predicate};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

// Each byte pair (mask, value): the expectation accepts elements whose value
// bit is set in `mask`. Checks the matcher against a brute-force search.
fuzz_target!(|data: &[u8]| {
    let pairs: Vec<(u8, u8)> = data.chunks_exact(2).take(6).map(|c| (c[0], c[1] % 8)).collect();
    let masks: Vec<u8> = pairs.iter().map(|(m, _)| *m).collect();
    let values: Vec<u8> = pairs.iter().map(|(_, v)| *v).collect();

    let pattern = Literal::Set(
        masks
            .iter()
            .map(|&mask| {
                Literal::from(Predicate::new(move |v| {
                    v.as_i64().is_some_and(|n| mask & (1 << n) != 0)
                }))
            })
            .collect(),
    );
    let actual = Value::Array(values.iter().map(|&v| Value::from(v)).collect());
    let result = jazon::match_json(&pattern, &actual).expect("predicates never fail");

    let mut used = vec![false; values.len()];
    let expected = brute_force(&masks, &values, 0, &mut used);
    assert_eq!(result.is_success(), expected);
});

fn brute_force(masks: &[u8], values: &[u8], i: usize, used: &mut [bool]) -> bool {
    if i == masks.len() {
        return true;
    }
    for j in 0..values.len() {
        if !used[j] && masks[i] & (1 << values[j]) != 0 {
            used[j] = true;
            if brute_force(masks, values, i + 1, used) {
                return true;
            }
            used[j] = false;
        }
    }
    false
}
