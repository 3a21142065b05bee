use std::path::PathBuf;

/// Which report files a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
    Both,
}

impl ReportFormat {
    pub fn writes_json(&self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }

    pub fn writes_csv(&self) -> bool {
        matches!(self, ReportFormat::Csv | ReportFormat::Both)
    }
}

/// Configuration for report output.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format: ReportFormat,
    /// Directory the report files are written into.
    pub target_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Both,
            target_dir: PathBuf::from("."),
        }
    }
}
