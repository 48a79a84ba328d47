//! Quality report data model
//!
//! The fixed-schema report produced by the analyze and improve flows:
//! a summary, a clarity score with its reason, and seven ordered lists
//! of short findings. List order is the model's output order and only
//! affects display.

use serde::{Deserialize, Serialize};

/// A structured quality review of a single requirement.
///
/// Invariant: `clarity_score` is an integer in [0, 100]; a report
/// failing this is rejected by `validator::validate_report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub summary: String,
    pub clarity_score: i64,
    pub clarity_score_reason: String,
    pub ambiguities: Vec<String>,
    pub missing_information: Vec<String>,
    pub assumptions: Vec<String>,
    pub risks_and_dependencies: Vec<String>,
    pub edge_cases: Vec<String>,
    pub acceptance_criteria: Vec<String>,
    pub test_scenarios: Vec<String>,
}

impl QualityReport {
    /// The seven list-of-string keys, in schema order.
    pub const LIST_KEYS: [&'static str; 7] = [
        "ambiguities",
        "missing_information",
        "assumptions",
        "risks_and_dependencies",
        "edge_cases",
        "acceptance_criteria",
        "test_scenarios",
    ];
}
