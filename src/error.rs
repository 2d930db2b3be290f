use crate::path::JsonPointer;
use std::fmt;
use thiserror::Error;

/// Boxed error returned by a failing predicate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Produced while building an expectation tree from a literal.
///
/// Always raised at construction time, never during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The literal (or a nested literal) has a shape no factory accepts.
    #[error("unsupported literal kind `{}` at {}", .type_name, .path.describe())]
    UnsupportedLiteralKind {
        type_name: String,
        path: JsonPointer,
    },
    #[error("invalid regular expression `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },
    #[error("invalid predicate expression `{expression}`: {message}")]
    InvalidExpression { expression: String, message: String },
}

/// A predicate raised an error while being evaluated.
///
/// This is a bug in the pattern, not a mismatch, so it is surfaced separately
/// from [`Failure`](crate::report::Failure)s.
#[derive(Debug, Error)]
pub struct PredicateError {
    pub path: JsonPointer,
    pub description: Option<String>,
    #[source]
    pub source: BoxError,
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "predicate `{}` failed at {}: {}", d, self.path.describe(), self.source),
            None => write!(f, "predicate failed at {}: {}", self.path.describe(), self.source),
        }
    }
}

/// Combined error type for the composed entry points.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    #[error("evaluation error: {0}")]
    Predicate(#[from] PredicateError),
}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SerializeError {
    pub message: String,
}

/// A configuration document could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid configuration: {message}")]
pub struct ConfigError {
    pub message: String,
}
