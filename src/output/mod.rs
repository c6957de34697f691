//! Report formatting.
//!
//! Two formats over the same cell snapshots:
//! - Terminal: fixed-order text records, one block per cell
//! - JSON: machine-readable serialization

mod json;
mod terminal;

use std::io::Write;

use rug::Float;

pub use json::{to_json, to_json_pretty};
pub use terminal::write_text_reports;

use crate::statistics::Report;

/// Render a statistics value in scientific notation with 10 significant
/// digits.
///
/// rug's exponent formatting short-circuits an exact zero to a bare `0`
/// before applying the format, so zero is rendered explicitly to keep the
/// report fields uniformly scientific. Note that `{:.10e}` counts total
/// significant digits for a rug `Float`, not digits after the point.
pub(crate) fn format_value(value: &Float) -> String {
    if value.is_zero() {
        "0.000000000e0".to_string()
    } else {
        format!("{value:.10e}")
    }
}

/// Output format for engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text, one block per cell in fixed field order.
    #[default]
    Text,
    /// One compact JSON array per report request.
    Json,
}

/// Write every cell's report to `out` in the requested format and flush.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[Report],
    format: ReportFormat,
) -> std::io::Result<()> {
    match format {
        ReportFormat::Text => write_text_reports(out, reports),
        ReportFormat::Json => {
            let line = to_json(reports).map_err(std::io::Error::other)?;
            writeln!(out, "{line}")?;
            out.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_uses_ten_significant_digits() {
        let value = Float::with_val(256, 0.125);
        assert_eq!(format_value(&value), "1.250000000e-1");
        let negative = Float::with_val(256, -0.125);
        assert_eq!(format_value(&negative), "-1.250000000e-1");
    }

    #[test]
    fn format_value_renders_zero_scientifically() {
        let zero = Float::with_val(256, 0);
        assert_eq!(format_value(&zero), "0.000000000e0");
    }
}
