//! Fixed-order text report records.

use std::io::Write;

use super::format_value;
use crate::statistics::Report;

/// Write one text block per cell, in the order given, then flush.
///
/// Field order per block: distribution name, evaluator name, sample count,
/// relative-error mean, variance, standard deviation. Mean and spread are
/// printed in scientific notation with 10 significant digits; an undefined
/// variance or standard deviation (fewer than two samples) prints as `n/a`.
pub fn write_text_reports<W: Write>(out: &mut W, reports: &[Report]) -> std::io::Result<()> {
    for report in reports {
        write_block(out, report)?;
    }
    out.flush()
}

fn write_block<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(
        out,
        "#   Distribution: \"{}\"   Evaluator: \"{}\"",
        report.distribution.name(),
        report.evaluator.name()
    )?;
    writeln!(out, "Samples: {}", report.samples)?;
    writeln!(out, "Relative difference mean: {}", format_value(&report.mean))?;
    match (&report.variance, &report.stddev) {
        (Some(variance), Some(stddev)) => {
            writeln!(out, "Relative difference variance: {}", format_value(variance))?;
            writeln!(
                out,
                "Relative difference standard deviation: {}",
                format_value(stddev)
            )?;
        }
        _ => {
            writeln!(out, "Relative difference variance: n/a")?;
            writeln!(out, "Relative difference standard deviation: n/a")?;
        }
    }
    writeln!(out)
}
