//! [`Report`] → YAML / JSON text.

use crate::error::SerializeError;
use crate::report::Report;

/// Serialize a report to a YAML string.
///
/// Each failure is emitted with its pointer `path` and a `reason` mapping
/// tagged by `kind`.
pub fn to_yaml(report: &Report) -> Result<String, SerializeError> {
    // Go through serde_json::Value so field order follows the struct definitions
    let value = serde_json::to_value(report).map_err(|e| SerializeError {
        message: format!("failed to convert report to JSON value: {}", e),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}

/// Serialize a report to pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String, SerializeError> {
    serde_json::to_string_pretty(report).map_err(|e| SerializeError {
        message: format!("failed to serialize to JSON: {}", e),
    })
}
