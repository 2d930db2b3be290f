//! Shared algorithms used by expectation evaluation.

use serde_json::Number;

// ─── number equality ────────────────────────────────────────────────────────

/// Exact numeric equality.
///
/// Integers are compared as integers, so large `i64`/`u64` values never lose
/// precision. An integer equals a float only when the float is integral and
/// has exactly the same value: `42` equals `42.0`, but `2^53 + 1` does not
/// equal `2^53` even though both round to the same `f64`. Two floats compare
/// with `==`; there is no epsilon.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (integer_value(a), integer_value(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(x), None) => b.as_f64().is_some_and(|f| integer_equals_float(x, f)),
        (None, Some(y)) => a.as_f64().is_some_and(|f| integer_equals_float(y, f)),
        (None, None) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

fn integer_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

const I128_MIN_F64: f64 = i128::MIN as f64;

fn integer_equals_float(int: i128, float: f64) -> bool {
    // -2^127 <= float < 2^127 converts to i128 without saturating.
    float.fract() == 0.0
        && float >= I128_MIN_F64
        && float < -I128_MIN_F64
        && float as i128 == int
}

// ─── bipartite matching ─────────────────────────────────────────────────────

/// Maximum bipartite matching between `left` and `right` vertices.
///
/// `edges[l]` lists the right vertices compatible with left vertex `l`.
/// Uses augmenting paths (Kuhn's algorithm), `O(V * E)`. Returns for each left
/// vertex the right vertex it is paired with, if any.
pub fn maximum_bipartite_matching(edges: &[Vec<usize>], right: usize) -> Vec<Option<usize>> {
    let mut match_of_right: Vec<Option<usize>> = vec![None; right];

    for l in 0..edges.len() {
        let mut visited = vec![false; right];
        augment(l, edges, &mut visited, &mut match_of_right);
    }

    let mut match_of_left = vec![None; edges.len()];
    for (r, l) in match_of_right.iter().enumerate() {
        if let Some(l) = l {
            match_of_left[*l] = Some(r);
        }
    }
    match_of_left
}

fn augment(
    l: usize,
    edges: &[Vec<usize>],
    visited: &mut [bool],
    match_of_right: &mut [Option<usize>],
) -> bool {
    for &r in &edges[l] {
        if visited[r] {
            continue;
        }
        visited[r] = true;
        let free = match match_of_right[r] {
            None => true,
            Some(other) => augment(other, edges, visited, match_of_right),
        };
        if free {
            match_of_right[r] = Some(l);
            return true;
        }
    }
    false
}
