use std::fs;

use crate::config::ReportConfig;
use crate::csv::CsvFormatter;
use crate::json::JsonFormatter;
use crate::report::Report;
use crate::summary::SummaryFormatter;
use crate::traits::{OutputError, ReportFormatter};

pub const JSON_REPORT_NAME: &str = "version_report.json";
pub const CSV_REPORT_NAME: &str = "version_report.csv";

/// Coordinates report file output and the stdout summary.
///
/// Report files are overwritten on every run. A failed write may leave a
/// truncated file behind; no cleanup is attempted.
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Write the configured report files, then print the summary to stdout.
    pub fn run(&self, report: &Report) -> Result<(), OutputError> {
        if self.config.format.writes_json() {
            self.write_file(JSON_REPORT_NAME, &JsonFormatter, report)?;
        }
        if self.config.format.writes_csv() {
            self.write_file(CSV_REPORT_NAME, &CsvFormatter, report)?;
        }

        let summary = SummaryFormatter.format(report)?;
        print!("{}", summary);

        Ok(())
    }

    fn write_file(
        &self,
        name: &str,
        formatter: &dyn ReportFormatter,
        report: &Report,
    ) -> Result<(), OutputError> {
        let path = self.config.target_dir.join(name);
        let output = formatter.format(report)?;
        fs::write(&path, &output).map_err(|e| {
            OutputError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {}", path.display(), e),
            ))
        })
    }
}
