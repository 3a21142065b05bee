use crate::report::Report;
use crate::traits::{OutputError, ReportFormatter};

/// Formats the report as pretty-printed JSON.
///
/// Since `Report` derives `Serialize`, this is near-trivial.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String, OutputError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| OutputError::FormatError(format!("JSON serialization error: {e}")))
    }
}
