//! Closed enumerations shared by the actual-value model, the factory and the matcher.
//!
//! Policy enums are deserialisable so a [`MatchConfig`](crate::config::MatchConfig)
//! can be loaded from YAML or JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of an [`Actual`](crate::actual::Actual) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActualKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl ActualKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActualKind::String => "string",
            ActualKind::Number => "number",
            ActualKind::Boolean => "boolean",
            ActualKind::Null => "null",
            ActualKind::Array => "array",
            ActualKind::Object => "object",
        }
    }
}

impl fmt::Display for ActualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How object expectations treat keys present in the actual object but absent
/// from the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectPolicy {
    /// Extra actual keys are tolerated.
    #[default]
    Subset,
    /// Extra actual keys fail with `UnexpectedKey`.
    Exact,
}

/// How list literals are interpreted by the factory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPolicy {
    /// Lists become ordered array expectations.
    #[default]
    Ordered,
    /// Lists become unordered array expectations, like sets.
    Unordered,
}

/// Whether the matcher stops at the first failure or collects all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    #[default]
    FirstFailure,
    AllFailures,
}

/// Discriminant of a [`Reason`](crate::report::Reason).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    KindMismatch,
    ValueMismatch,
    LengthMismatch,
    MissingKey,
    UnexpectedKey,
    PredicateRejected,
    NoMatchingPermutation,
}
