//! JSON serialization for report records.

use serde::Serialize;

use super::format_value;
use crate::statistics::Report;

/// Serializable form of one cell's report.
///
/// Mean, variance, and standard deviation are rendered as scientific-notation
/// strings: the values are arbitrary-precision and would lose digits in a
/// JSON number. Undefined spread (fewer than two samples) serializes as null.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    distribution: &'a str,
    evaluator: &'a str,
    samples: u64,
    mean: String,
    variance: Option<String>,
    stddev: Option<String>,
}

impl<'a> From<&'a Report> for JsonRecord<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            distribution: report.distribution.name(),
            evaluator: report.evaluator.name(),
            samples: report.samples,
            mean: format_value(&report.mean),
            variance: report.variance.as_ref().map(format_value),
            stddev: report.stddev.as_ref().map(format_value),
        }
    }
}

/// Serialize cell reports to a compact JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for these
/// records).
pub fn to_json(reports: &[Report]) -> Result<String, serde_json::Error> {
    let records: Vec<JsonRecord> = reports.iter().map(JsonRecord::from).collect();
    serde_json::to_string(&records)
}

/// Serialize cell reports to a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for these
/// records).
pub fn to_json_pretty(reports: &[Report]) -> Result<String, serde_json::Error> {
    let records: Vec<JsonRecord> = reports.iter().map(JsonRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
