//! Report validation
//!
//! Checks an extracted JSON value against the fixed report schema and
//! builds the typed `QualityReport`. One reusable pass shared by the
//! analyze flow, the agent flow, and the standalone `check` command.

use crate::models::QualityReport;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A required key is missing or has the wrong kind. Names the first
    /// offender in schema order.
    #[error("invalid report: key '{key}' {problem}")]
    SchemaViolation { key: String, problem: String },

    /// `clarity_score` is an integer but outside [0, 100].
    #[error("invalid report: clarity_score {value} is out of range 0..=100")]
    RangeViolation { value: i64 },
}

impl ReportError {
    fn missing(key: &str) -> Self {
        ReportError::SchemaViolation {
            key: key.to_string(),
            problem: "is missing".to_string(),
        }
    }

    fn mistyped(key: &str, expected: &str, found: &Value) -> Self {
        ReportError::SchemaViolation {
            key: key.to_string(),
            problem: format!("expected {}, got {}", expected, kind_of(found)),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate an extracted value against the report schema.
///
/// Keys are checked in fixed order (summary, clarity_score,
/// clarity_score_reason, then the seven list fields); the first missing
/// or mistyped key fails with `SchemaViolation` naming it, and a
/// clarity score outside [0, 100] fails with `RangeViolation`.
pub fn validate_report(value: &Value) -> Result<QualityReport, ReportError> {
    let obj = value.as_object().ok_or_else(|| ReportError::SchemaViolation {
        key: "summary".to_string(),
        problem: format!("cannot be read: report is {}, not an object", kind_of(value)),
    })?;

    let summary = require_string(obj, "summary")?;
    let clarity_score = require_integer(obj, "clarity_score")?;
    if !(0..=100).contains(&clarity_score) {
        return Err(ReportError::RangeViolation {
            value: clarity_score,
        });
    }
    let clarity_score_reason = require_string(obj, "clarity_score_reason")?;

    Ok(QualityReport {
        summary,
        clarity_score,
        clarity_score_reason,
        ambiguities: require_string_list(obj, "ambiguities")?,
        missing_information: require_string_list(obj, "missing_information")?,
        assumptions: require_string_list(obj, "assumptions")?,
        risks_and_dependencies: require_string_list(obj, "risks_and_dependencies")?,
        edge_cases: require_string_list(obj, "edge_cases")?,
        acceptance_criteria: require_string_list(obj, "acceptance_criteria")?,
        test_scenarios: require_string_list(obj, "test_scenarios")?,
    })
}

fn require_string(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<String, ReportError> {
    let value = obj.get(key).ok_or_else(|| ReportError::missing(key))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ReportError::mistyped(key, "a string", value))
}

fn require_integer(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<i64, ReportError> {
    let value = obj.get(key).ok_or_else(|| ReportError::missing(key))?;
    value
        .as_i64()
        .ok_or_else(|| ReportError::mistyped(key, "an integer", value))
}

fn require_string_list(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, ReportError> {
    let value = obj.get(key).ok_or_else(|| ReportError::missing(key))?;
    let items = value
        .as_array()
        .ok_or_else(|| ReportError::mistyped(key, "a list of strings", value))?;

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let s = item
            .as_str()
            .ok_or_else(|| ReportError::mistyped(key, "a list of strings", item))?;
        out.push(s.to_string());
    }
    Ok(out)
}
