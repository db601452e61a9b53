//! Rendering of validation outcomes.
//!
//! Writers are passed in so output can be captured. The confirmation goes
//! to stdout; warnings and blocking reasons go to stderr.

use crate::config::{ConfigWarning, ValidationReport};
use serde_json::{Value, json};
use std::io::{self, Write};

pub fn write_report<O: Write, E: Write>(
    report: &ValidationReport,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    write_tls_warning(report, err)?;

    if report.is_ready() {
        writeln!(out, "Content will be submitted to the content service.")?;
        return Ok(());
    }

    writeln!(err, "Not submitting content to the content service because:")?;
    writeln!(err)?;
    for reason in &report.reasons {
        writeln!(err, " * {}", reason)?;
    }
    writeln!(err)?;

    Ok(())
}

/// Warn on `err` when TLS verification is off. Written in every output mode.
pub fn write_tls_warning<E: Write>(report: &ValidationReport, err: &mut E) -> io::Result<()> {
    if report.tls_verify_disabled {
        writeln!(err)?;
        writeln!(err, "TLS certificate verification disabled!")?;
        writeln!(err)?;
    }
    Ok(())
}

pub fn write_warnings<E: Write>(warnings: &[ConfigWarning], err: &mut E) -> io::Result<()> {
    for warning in warnings {
        writeln!(err, "{}", warning)?;
    }
    Ok(())
}

/// Machine-readable form of a validation outcome.
pub fn report_json(report: &ValidationReport, warnings: &[ConfigWarning]) -> Value {
    json!({
        "submit": report.is_ready(),
        "tls_verify_disabled": report.tls_verify_disabled,
        "reasons": report
            .reasons
            .iter()
            .map(|r| json!({ "code": r, "message": r.to_string() }))
            .collect::<Vec<_>>(),
        "warnings": warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}
