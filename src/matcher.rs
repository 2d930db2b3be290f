//! Evaluation of expectation trees against actual values.

use crate::actual::Actual;
use crate::config::MatchConfig;
use crate::enums::FailureMode;
use crate::error::PredicateError;
use crate::expectation::Expectation;
use crate::path::{JsonPointer, LazyPointer};
use crate::report::{Failure, MatchResult, Reason};

/// Per-call evaluation state: the failure mode and the failures recorded so far.
///
/// Probe evaluations (used to test candidate pairings of unordered arrays)
/// record nothing and always stop at the first failure.
pub(crate) struct Evaluation {
    mode: FailureMode,
    recording: bool,
    failures: Vec<Failure>,
}

impl Evaluation {
    fn new(mode: FailureMode) -> Self {
        Evaluation {
            mode,
            recording: true,
            failures: Vec::new(),
        }
    }

    pub(crate) fn probe() -> Self {
        Evaluation {
            mode: FailureMode::FirstFailure,
            recording: false,
            failures: Vec::new(),
        }
    }

    /// Records a failure at `path`. Always returns `false`.
    pub(crate) fn fail(&mut self, path: &LazyPointer<'_, '_>, reason: Reason) -> bool {
        if self.recording {
            let path = JsonPointer::from(path);
            tracing::debug!(path = %path.describe(), %reason, "expectation not met");
            self.failures.push(Failure { path, reason });
        }
        false
    }

    pub(crate) fn collects_all(&self) -> bool {
        self.mode == FailureMode::AllFailures
    }
}

/// Evaluates expectation trees under a fixed [`MatchConfig`].
///
/// Holds no per-call state; one matcher can serve many evaluations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Matcher { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Evaluates `expectation` against `actual`.
    ///
    /// Mismatches are returned as [`MatchResult::Failure`]. An `Err` means a
    /// predicate itself failed; no mismatch report is produced in that case.
    pub fn evaluate(
        &self,
        expectation: &Expectation,
        actual: &Actual,
    ) -> Result<MatchResult, PredicateError> {
        let mut eval = Evaluation::new(self.config.failures);
        let root = LazyPointer::new();
        let matched = expectation.evaluate(actual, &mut eval, &root)?;
        debug_assert_eq!(matched, eval.failures.is_empty());
        Ok(MatchResult::from_failures(eval.failures))
    }

    /// Like [`Matcher::evaluate`] but only reports whether the value matched.
    pub fn is_match(&self, expectation: &Expectation, actual: &Actual) -> Result<bool, PredicateError> {
        let mut eval = Evaluation::probe();
        expectation.evaluate(actual, &mut eval, &LazyPointer::new())
    }
}
