use std::fmt::Write;

use crate::report::Report;
use crate::traits::{OutputError, ReportFormatter};

/// The two-line human summary printed after a run.
pub struct SummaryFormatter;

impl ReportFormatter for SummaryFormatter {
    fn format(&self, report: &Report) -> Result<String, OutputError> {
        let mut out = String::new();
        writeln!(
            out,
            "Scan complete. Found {} hosts with {} services.",
            report.hosts, report.services
        )
        .map_err(|e| OutputError::FormatError(e.to_string()))?;
        writeln!(
            out,
            "Identified {} potential vulnerabilities.",
            report.vulnerabilities.len()
        )
        .map_err(|e| OutputError::FormatError(e.to_string()))?;
        Ok(out)
    }
}
