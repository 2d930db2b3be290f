//! Building expectation trees from literals.
//!
//! A factory interprets one literal node and hands itself to the helper
//! builders for nested literals, so a whole tree is built by one rule set.
//! Substituting another [`ExpectationFactory`] at a composition boundary
//! changes how that subtree is interpreted without touching the recursion.

use crate::config::MatchConfig;
use crate::enums::{ListPolicy, ObjectPolicy};
use crate::error::BuildError;
use crate::expectation::{Expectation, ObjectExpectation, Scalar};
use crate::literal::Literal;
use crate::path::JsonPointer;
use std::collections::BTreeMap;

/// Converts literals into expectation nodes.
pub trait ExpectationFactory {
    /// Builds the expectation for `literal`, located at `path` in the pattern.
    ///
    /// Implementations recurse into nested literals by passing `self` to
    /// [`object_expectation`], [`ordered_array_expectation`] and
    /// [`unordered_array_expectation`].
    fn expectation_at(&self, literal: &Literal, path: &JsonPointer) -> Result<Expectation, BuildError>;

    /// Builds the expectation for a root literal.
    fn expectation(&self, literal: &Literal) -> Result<Expectation, BuildError> {
        self.expectation_at(literal, &JsonPointer::root())
    }
}

/// Builds an object expectation, interpreting every value with `factory`.
pub fn object_expectation(
    fields: &BTreeMap<String, Literal>,
    policy: ObjectPolicy,
    factory: &dyn ExpectationFactory,
    path: &JsonPointer,
) -> Result<Expectation, BuildError> {
    let fields = fields
        .iter()
        .map(|(key, value)| {
            factory
                .expectation_at(value, &path.join_key(key))
                .map(|expectation| (key.clone(), expectation))
        })
        .collect::<Result<BTreeMap<_, _>, BuildError>>()?;
    Ok(Expectation::Object(ObjectExpectation { fields, policy }))
}

/// Builds an ordered array expectation, preserving element order.
pub fn ordered_array_expectation(
    items: &[Literal],
    factory: &dyn ExpectationFactory,
    path: &JsonPointer,
) -> Result<Expectation, BuildError> {
    Ok(Expectation::OrderedArray(build_items(items, factory, path)?))
}

/// Builds an unordered array expectation.
pub fn unordered_array_expectation(
    items: &[Literal],
    factory: &dyn ExpectationFactory,
    path: &JsonPointer,
) -> Result<Expectation, BuildError> {
    Ok(Expectation::UnorderedArray(build_items(items, factory, path)?))
}

fn build_items(
    items: &[Literal],
    factory: &dyn ExpectationFactory,
    path: &JsonPointer,
) -> Result<Vec<Expectation>, BuildError> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| factory.expectation_at(item, &path.join_index(idx)))
        .collect()
}

/// The standard factory: one branch per literal shape, driven by a [`MatchConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultExpectationFactory {
    config: MatchConfig,
}

impl DefaultExpectationFactory {
    pub fn new(config: MatchConfig) -> Self {
        DefaultExpectationFactory { config }
    }

    /// A factory whose object expectations reject extra keys.
    pub fn exact() -> Self {
        Self::new(MatchConfig::default().with_objects(ObjectPolicy::Exact))
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl ExpectationFactory for DefaultExpectationFactory {
    fn expectation_at(&self, literal: &Literal, path: &JsonPointer) -> Result<Expectation, BuildError> {
        match literal {
            Literal::Map(fields) => object_expectation(fields, self.config.objects, self, path),
            Literal::Number(n) => Ok(Expectation::Primitive(Scalar::Number(n.clone()))),
            Literal::String(s) => Ok(Expectation::Primitive(Scalar::String(s.clone()))),
            Literal::Boolean(b) => Ok(Expectation::Primitive(Scalar::Boolean(*b))),
            Literal::List(items) => match self.config.lists {
                ListPolicy::Ordered => ordered_array_expectation(items, self, path),
                ListPolicy::Unordered => unordered_array_expectation(items, self, path),
            },
            Literal::Set(items) => unordered_array_expectation(items, self, path),
            Literal::Predicate(predicate) => Ok(Expectation::Predicate(predicate.clone())),
            Literal::Null => Ok(Expectation::Null),
            Literal::Unsupported { type_name } => {
                tracing::debug!(%type_name, path = %path.describe(), "rejecting literal");
                Err(BuildError::UnsupportedLiteralKind {
                    type_name: type_name.clone(),
                    path: path.clone(),
                })
            }
        }
    }
}
