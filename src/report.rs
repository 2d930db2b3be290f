//! Match results and human-readable failure reports.

use crate::enums::{ActualKind, FailureKind};
use crate::path::JsonPointer;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Why a position in the document did not satisfy its expectation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    KindMismatch {
        expected: ActualKind,
        actual: ActualKind,
    },
    ValueMismatch {
        expected: Value,
        actual: Value,
    },
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
    MissingKey {
        key: String,
    },
    UnexpectedKey {
        key: String,
    },
    PredicateRejected {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        actual: Value,
    },
    NoMatchingPermutation {
        unmatched_expectations: Vec<usize>,
        unmatched_elements: Vec<usize>,
    },
}

impl Reason {
    pub fn kind(&self) -> FailureKind {
        match self {
            Reason::KindMismatch { .. } => FailureKind::KindMismatch,
            Reason::ValueMismatch { .. } => FailureKind::ValueMismatch,
            Reason::LengthMismatch { .. } => FailureKind::LengthMismatch,
            Reason::MissingKey { .. } => FailureKind::MissingKey,
            Reason::UnexpectedKey { .. } => FailureKind::UnexpectedKey,
            Reason::PredicateRejected { .. } => FailureKind::PredicateRejected,
            Reason::NoMatchingPermutation { .. } => FailureKind::NoMatchingPermutation,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::KindMismatch { expected, actual } => {
                write!(f, "expected {}, found {}", expected, actual)
            }
            Reason::ValueMismatch { expected, actual } => {
                write!(f, "expected {}, found {}", expected, actual)
            }
            Reason::LengthMismatch { expected, actual } => write!(
                f,
                "expected array of {} element(s), found {}",
                expected, actual
            ),
            Reason::MissingKey { key } => write!(f, "missing key \"{}\"", key),
            Reason::UnexpectedKey { key } => write!(f, "unexpected key \"{}\"", key),
            Reason::PredicateRejected {
                description: Some(d),
                actual,
            } => write!(f, "{} rejected by predicate `{}`", actual, d),
            Reason::PredicateRejected {
                description: None,
                actual,
            } => write!(f, "{} rejected by predicate", actual),
            Reason::NoMatchingPermutation {
                unmatched_expectations,
                unmatched_elements,
            } => write!(
                f,
                "no pairing of elements satisfies every expectation \
                 (unpaired expectations {:?}, unpaired elements {:?})",
                unmatched_expectations, unmatched_elements
            ),
        }
    }
}

/// A single located mismatch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Failure {
    pub path: JsonPointer,
    pub reason: Reason,
}

impl Failure {
    pub fn kind(&self) -> FailureKind {
        self.reason.kind()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.describe(), self.reason)
    }
}

/// Outcome of evaluating an expectation against an actual value.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
    Success,
    /// Never empty.
    Failure(Vec<Failure>),
}

impl MatchResult {
    pub(crate) fn from_failures(failures: Vec<Failure>) -> Self {
        if failures.is_empty() {
            MatchResult::Success
        } else {
            MatchResult::Failure(failures)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MatchResult::Success)
    }

    pub fn failures(&self) -> &[Failure] {
        match self {
            MatchResult::Success => &[],
            MatchResult::Failure(failures) => failures,
        }
    }

    pub fn into_report(self) -> Report {
        match self {
            MatchResult::Success => Report::default(),
            MatchResult::Failure(failures) => Report { failures },
        }
    }
}

/// Presentation of all failures of one evaluation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failures.len() {
            0 => write!(f, "document matches the expectation"),
            1 => write!(f, "document does not match: {}", self.failures[0]),
            n => {
                write!(f, "document does not match ({} failures):", n)?;
                for (i, failure) in self.failures.iter().enumerate() {
                    write!(f, "\n  {}. {}", i + 1, failure)?;
                }
                Ok(())
            }
        }
    }
}
