use crate::report::Report;

/// Trait for rendering a report into an output document.
pub trait ReportFormatter: Send + Sync {
    fn format(&self, report: &Report) -> Result<String, OutputError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("formatting error: {0}")]
    FormatError(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
