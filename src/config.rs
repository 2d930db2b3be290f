//! Matching configuration shared by factories and matchers.

use crate::enums::{FailureMode, ListPolicy, ObjectPolicy};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Policies that parameterise expectation building and evaluation.
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// let config = jazon::MatchConfig::from_yaml("objects: exact\n").unwrap();
/// assert_eq!(config.objects, jazon::ObjectPolicy::Exact);
/// assert_eq!(config.lists, jazon::ListPolicy::Ordered);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Handling of extra keys in actual objects.
    pub objects: ObjectPolicy,
    /// Interpretation of list literals.
    pub lists: ListPolicy,
    /// Whether evaluation stops at the first failure.
    pub failures: FailureMode,
}

impl MatchConfig {
    pub fn with_objects(mut self, objects: ObjectPolicy) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_lists(mut self, lists: ListPolicy) -> Self {
        self.lists = lists;
        self
    }

    pub fn with_failures(mut self, failures: FailureMode) -> Self {
        self.failures = failures;
        self
    }

    /// Reads a configuration from YAML (JSON is accepted as well).
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(input).map_err(|e| ConfigError {
            message: e.to_string(),
        })
    }
}
