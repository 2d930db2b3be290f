//! Predicate callables stored inside expectation trees.
//!
//! A [`Predicate`] receives the raw [`Actual`] value and does its own kind
//! checks. Returning `Ok(false)` is an ordinary rejection; returning `Err` is a
//! predicate failure and propagates to the caller as a
//! [`PredicateError`](crate::error::PredicateError).

use crate::actual::Actual;
use crate::error::{BoxError, BuildError};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&Actual) -> Result<bool, BoxError> + Send + Sync;

/// A shared, thread-safe boolean function over actual values.
#[derive(Clone)]
pub struct Predicate {
    func: Arc<PredicateFn>,
    description: Option<String>,
}

impl Predicate {
    /// Wraps an infallible predicate.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Actual) -> bool + Send + Sync + 'static,
    {
        Predicate {
            func: Arc::new(move |actual: &Actual| -> Result<bool, BoxError> { Ok(func(actual)) }),
            description: None,
        }
    }

    /// Wraps a predicate that may fail.
    pub fn fallible<F, E>(func: F) -> Self
    where
        F: Fn(&Actual) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Predicate {
            func: Arc::new(move |actual: &Actual| -> Result<bool, BoxError> {
                func(actual).map_err(Into::into)
            }),
            description: None,
        }
    }

    /// Attaches a human-readable description used in reports.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Applies the predicate to a candidate value.
    pub fn test(&self, actual: &Actual) -> Result<bool, BoxError> {
        (self.func)(actual)
    }

    /// Whether both handles share the same underlying callable.
    pub fn ptr_eq(&self, other: &Predicate) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }

    /// Matches strings against a regular expression. Non-strings are rejected.
    pub fn regex(pattern: &str) -> Result<Self, BuildError> {
        let re = Regex::new(pattern).map_err(|e| BuildError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Predicate::new(move |actual| {
            actual.as_str().is_some_and(|s| re.is_match(s))
        })
        .described(format!("matches /{}/", pattern)))
    }

    /// Evaluates a CEL expression with the candidate bound to `value`.
    ///
    /// Missing keys and undeclared references reject the candidate. Any other
    /// execution error, or a non-boolean result, is a predicate failure.
    #[cfg(feature = "cel-eval")]
    pub fn cel(expression: &str) -> Result<Self, BuildError> {
        // Syntax errors surface now; the program is recompiled per call.
        cel::Program::compile(expression).map_err(|e| BuildError::InvalidExpression {
            expression: expression.to_string(),
            message: e.to_string(),
        })?;
        let source = expression.to_string();
        Ok(Predicate::fallible(move |actual| cel_eval::evaluate(&source, actual))
            .described(expression.to_string()))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "cel-eval")]
mod cel_eval {
    use crate::actual::Actual;
    use crate::error::BoxError;
    use std::collections::HashMap;
    use std::sync::Arc;

    pub(super) fn evaluate(expression: &str, actual: &Actual) -> Result<bool, BoxError> {
        let program = cel::Program::compile(expression)
            .map_err(|e| format!("CEL compile error: {}", e))?;

        let mut ctx = cel::Context::default();
        ctx.add_variable_from_value("value", actual_to_cel(actual));

        match program.execute(&ctx) {
            Ok(cel::Value::Bool(b)) => Ok(b),
            Ok(other) => Err(format!("CEL expression returned non-boolean result: {:?}", other).into()),
            Err(cel::ExecutionError::NoSuchKey(_)) => Ok(false),
            Err(cel::ExecutionError::UndeclaredReference(_)) => Ok(false),
            Err(e) => Err(format!("CEL execution error: {}", e).into()),
        }
    }

    fn actual_to_cel(actual: &Actual) -> cel::Value {
        match actual {
            Actual::Null => cel::Value::Null,
            Actual::Boolean(b) => cel::Value::Bool(*b),
            Actual::Number(n) => {
                if let Some(i) = n.as_i64() {
                    cel::Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    cel::Value::UInt(u)
                } else if let Some(f) = n.as_f64() {
                    cel::Value::Float(f)
                } else {
                    cel::Value::Null
                }
            }
            Actual::String(s) => cel::Value::String(Arc::new(s.clone())),
            Actual::Array(items) => {
                let items: Vec<cel::Value> = items.iter().map(actual_to_cel).collect();
                cel::Value::List(Arc::new(items))
            }
            Actual::Object(map) => {
                let entries: HashMap<String, cel::Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), actual_to_cel(v)))
                    .collect();
                entries.into()
            }
        }
    }
}
