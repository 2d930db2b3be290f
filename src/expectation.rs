//! Expectation trees and their evaluation against actual values.
//!
//! Trees are immutable once built and hold predicates behind `Arc`, so one
//! tree can be evaluated from many threads at once.

use crate::actual::Actual;
use crate::enums::{ActualKind, ObjectPolicy};
use crate::error::PredicateError;
use crate::matcher::Evaluation;
use crate::path::{JsonPointer, LazyPointer};
use crate::predicate::Predicate;
use crate::primitives::{maximum_bipartite_matching, numbers_equal};
use crate::report::Reason;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Expected scalar value together with the actual kind it must match.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Boolean(bool),
}

impl Scalar {
    pub fn kind(&self) -> ActualKind {
        match self {
            Scalar::String(_) => ActualKind::String,
            Scalar::Number(_) => ActualKind::Number,
            Scalar::Boolean(_) => ActualKind::Boolean,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Scalar::String(s) => Value::String(s.clone()),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::Boolean(b) => Value::Bool(*b),
        }
    }

    /// Whether `actual` holds an equal value. Kinds must already agree.
    fn equals(&self, actual: &Actual) -> bool {
        match (self, actual) {
            (Scalar::String(e), Actual::String(a)) => e == a,
            (Scalar::Number(e), Actual::Number(a)) => numbers_equal(e, a),
            (Scalar::Boolean(e), Actual::Boolean(a)) => e == a,
            _ => false,
        }
    }
}

/// Expected object: per-key expectations plus the policy for extra keys.
#[derive(Clone, Debug)]
pub struct ObjectExpectation {
    pub fields: BTreeMap<String, Expectation>,
    pub policy: ObjectPolicy,
}

/// One node of an expectation tree.
#[derive(Clone, Debug)]
pub enum Expectation {
    Primitive(Scalar),
    Null,
    Predicate(Predicate),
    OrderedArray(Vec<Expectation>),
    UnorderedArray(Vec<Expectation>),
    Object(ObjectExpectation),
}

impl Expectation {
    /// Short name of the node variant.
    pub fn name(&self) -> &'static str {
        match self {
            Expectation::Primitive(_) => "primitive",
            Expectation::Null => "null",
            Expectation::Predicate(_) => "predicate",
            Expectation::OrderedArray(_) => "ordered_array",
            Expectation::UnorderedArray(_) => "unordered_array",
            Expectation::Object(_) => "object",
        }
    }

    /// Evaluates this node against `actual`, recording failures into `eval`.
    ///
    /// Returns `Ok(true)` when the value satisfies the node. Predicate errors
    /// abort the whole evaluation.
    pub(crate) fn evaluate(
        &self,
        actual: &Actual,
        eval: &mut Evaluation,
        path: &LazyPointer<'_, '_>,
    ) -> Result<bool, PredicateError> {
        tracing::trace!(node = self.name(), actual = %actual.kind(), "evaluating");
        match self {
            Expectation::Primitive(expected) => Ok(evaluate_primitive(expected, actual, eval, path)),
            Expectation::Null => {
                if actual.is_null() {
                    Ok(true)
                } else {
                    Ok(eval.fail(
                        path,
                        Reason::KindMismatch {
                            expected: ActualKind::Null,
                            actual: actual.kind(),
                        },
                    ))
                }
            }
            Expectation::Predicate(predicate) => evaluate_predicate(predicate, actual, eval, path),
            Expectation::OrderedArray(items) => evaluate_ordered(items, actual, eval, path),
            Expectation::UnorderedArray(items) => evaluate_unordered(items, actual, eval, path),
            Expectation::Object(object) => evaluate_object(object, actual, eval, path),
        }
    }
}

fn evaluate_primitive(
    expected: &Scalar,
    actual: &Actual,
    eval: &mut Evaluation,
    path: &LazyPointer<'_, '_>,
) -> bool {
    if expected.kind() != actual.kind() {
        return eval.fail(
            path,
            Reason::KindMismatch {
                expected: expected.kind(),
                actual: actual.kind(),
            },
        );
    }
    if expected.equals(actual) {
        true
    } else {
        eval.fail(
            path,
            Reason::ValueMismatch {
                expected: expected.to_json(),
                actual: actual.to_json(),
            },
        )
    }
}

fn evaluate_predicate(
    predicate: &Predicate,
    actual: &Actual,
    eval: &mut Evaluation,
    path: &LazyPointer<'_, '_>,
) -> Result<bool, PredicateError> {
    match predicate.test(actual) {
        Ok(true) => Ok(true),
        Ok(false) => Ok(eval.fail(
            path,
            Reason::PredicateRejected {
                description: predicate.description().map(str::to_string),
                actual: actual.to_json(),
            },
        )),
        Err(source) => Err(PredicateError {
            path: JsonPointer::from(path),
            description: predicate.description().map(str::to_string),
            source,
        }),
    }
}

/// Checks the array kind and length shared by both array variants.
fn expect_array<'v>(
    expected_len: usize,
    actual: &'v Actual,
    eval: &mut Evaluation,
    path: &LazyPointer<'_, '_>,
) -> Option<&'v [Actual]> {
    let Some(elements) = actual.as_array() else {
        eval.fail(
            path,
            Reason::KindMismatch {
                expected: ActualKind::Array,
                actual: actual.kind(),
            },
        );
        return None;
    };
    if elements.len() != expected_len {
        eval.fail(
            path,
            Reason::LengthMismatch {
                expected: expected_len,
                actual: elements.len(),
            },
        );
        return None;
    }
    Some(elements)
}

fn evaluate_ordered(
    items: &[Expectation],
    actual: &Actual,
    eval: &mut Evaluation,
    path: &LazyPointer<'_, '_>,
) -> Result<bool, PredicateError> {
    let Some(elements) = expect_array(items.len(), actual, eval, path) else {
        return Ok(false);
    };
    let mut matched = true;
    for (idx, (expected, element)) in items.iter().zip(elements).enumerate() {
        if !expected.evaluate(element, eval, &path.push_index(idx))? {
            matched = false;
            if !eval.collects_all() {
                break;
            }
        }
    }
    Ok(matched)
}

fn evaluate_unordered(
    items: &[Expectation],
    actual: &Actual,
    eval: &mut Evaluation,
    path: &LazyPointer<'_, '_>,
) -> Result<bool, PredicateError> {
    let Some(elements) = expect_array(items.len(), actual, eval, path) else {
        return Ok(false);
    };

    // edges[i] = elements that expectation i accepts
    let mut edges = Vec::with_capacity(items.len());
    let mut probe = Evaluation::probe();
    for expected in items {
        let mut accepted = Vec::new();
        for (idx, element) in elements.iter().enumerate() {
            if expected.evaluate(element, &mut probe, &path.push_index(idx))? {
                accepted.push(idx);
            }
        }
        edges.push(accepted);
    }

    let pairing = maximum_bipartite_matching(&edges, elements.len());
    let unmatched_expectations: Vec<usize> = pairing
        .iter()
        .enumerate()
        .filter_map(|(i, m)| m.is_none().then_some(i))
        .collect();
    if unmatched_expectations.is_empty() {
        return Ok(true);
    }

    let mut paired = vec![false; elements.len()];
    for r in pairing.iter().flatten() {
        paired[*r] = true;
    }
    let unmatched_elements = paired
        .iter()
        .enumerate()
        .filter_map(|(i, p)| (!p).then_some(i))
        .collect();
    Ok(eval.fail(
        path,
        Reason::NoMatchingPermutation {
            unmatched_expectations,
            unmatched_elements,
        },
    ))
}

fn evaluate_object(
    object: &ObjectExpectation,
    actual: &Actual,
    eval: &mut Evaluation,
    path: &LazyPointer<'_, '_>,
) -> Result<bool, PredicateError> {
    let Some(map) = actual.as_object() else {
        return Ok(eval.fail(
            path,
            Reason::KindMismatch {
                expected: ActualKind::Object,
                actual: actual.kind(),
            },
        ));
    };

    let mut matched = true;
    for (key, expected) in &object.fields {
        let child = path.push_key(key);
        let ok = match map.get(key) {
            Some(value) => expected.evaluate(value, eval, &child)?,
            None => eval.fail(&child, Reason::MissingKey { key: key.clone() }),
        };
        if !ok {
            matched = false;
            if !eval.collects_all() {
                return Ok(false);
            }
        }
    }

    if object.policy == ObjectPolicy::Exact {
        for key in map.keys() {
            if object.fields.contains_key(key) {
                continue;
            }
            eval.fail(&path.push_key(key), Reason::UnexpectedKey { key: key.clone() });
            matched = false;
            if !eval.collects_all() {
                break;
            }
        }
    }

    Ok(matched)
}
