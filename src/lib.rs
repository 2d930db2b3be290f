//! Structural matching of parsed JSON documents against literal patterns.
//!
//! A pattern is written as a [`Literal`]: maps, lists, sets, scalars, `null`
//! and predicates. A factory turns it into an immutable [`Expectation`] tree
//! and a [`Matcher`] evaluates that tree against an [`Actual`] document:
//!
//! ```text
//! Literal → ExpectationFactory::expectation → Expectation ┐
//! serde_json::Value → Actual ─────────────────────────────┴→ Matcher::evaluate → MatchResult → Report
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use jazon::{Literal, Predicate};
//! use serde_json::json;
//!
//! let pattern = Literal::map([
//!     ("name", Literal::from("jazon")),
//!     ("tags", Literal::set(["json", "test"])),
//!     ("stars", Literal::predicate(|v| v.as_i64().is_some_and(|n| n > 10))),
//! ]);
//! let actual = json!({"name": "jazon", "tags": ["test", "json"], "stars": 42, "extra": true});
//!
//! let result = jazon::match_json(&pattern, &actual).expect("pattern is valid");
//! assert!(result.is_success());
//! ```
//!
//! # Policies
//!
//! Objects are matched as subsets by default (extra actual keys are ignored);
//! [`ObjectPolicy::Exact`] rejects them. Lists are ordered unless
//! [`ListPolicy::Unordered`] is configured; sets are always unordered.
//! See [`MatchConfig`].
//!
//! # Feature Flags
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `cel-eval` | yes     | CEL expression predicates via the [`cel`] crate. Enables [`Predicate::cel`]. |

pub mod actual;
pub mod config;
pub mod enums;
pub mod error;
pub mod expectation;
pub mod factory;
pub mod literal;
pub mod matcher;
pub mod path;
pub mod predicate;
pub mod primitives;
pub mod report;
pub mod serialize;

pub use actual::Actual;
pub use config::MatchConfig;
pub use enums::*;
pub use error::*;
pub use expectation::{Expectation, ObjectExpectation, Scalar};
pub use factory::{DefaultExpectationFactory, ExpectationFactory};
pub use literal::Literal;
pub use matcher::Matcher;
pub use path::{JsonPointer, Segment};
pub use predicate::Predicate;
pub use report::{Failure, MatchResult, Reason, Report};

/// Builds an expectation tree with the default factory.
///
/// # Errors
///
/// Returns [`BuildError::UnsupportedLiteralKind`] if any nested literal has an
/// unsupported shape.
pub fn build(literal: &Literal) -> Result<Expectation, BuildError> {
    DefaultExpectationFactory::default().expectation(literal)
}

/// Evaluates an expectation tree with the default matcher.
///
/// # Errors
///
/// Returns [`PredicateError`] if a predicate fails while being evaluated.
pub fn evaluate(expectation: &Expectation, actual: &Actual) -> Result<MatchResult, PredicateError> {
    Matcher::default().evaluate(expectation, actual)
}

/// Convenience entry point composing build → evaluate for a `serde_json` document.
///
/// # Errors
///
/// Returns [`MatchError::Build`] for invalid patterns and
/// [`MatchError::Predicate`] when a predicate fails.
pub fn match_json(pattern: &Literal, actual: &serde_json::Value) -> Result<MatchResult, MatchError> {
    match_json_with(MatchConfig::default(), pattern, actual)
}

/// Like [`match_json`], with explicit policies.
///
/// # Errors
///
/// See [`match_json`].
pub fn match_json_with(
    config: MatchConfig,
    pattern: &Literal,
    actual: &serde_json::Value,
) -> Result<MatchResult, MatchError> {
    let expectation = DefaultExpectationFactory::new(config).expectation(pattern)?;
    let actual = Actual::from(actual);
    Ok(Matcher::new(config).evaluate(&expectation, &actual)?)
}

/// Panics with a formatted [`Report`] unless `actual` matches `pattern`.
///
/// Intended for test code.
///
/// # Panics
///
/// Panics on mismatch, on invalid patterns and on predicate failures.
#[track_caller]
pub fn assert_matches(pattern: &Literal, actual: &serde_json::Value) {
    match match_json(pattern, actual) {
        Ok(MatchResult::Success) => {}
        Ok(result) => panic!("{}", result.into_report()),
        Err(e) => panic!("{}", e),
    }
}
