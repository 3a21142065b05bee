/// Errors from scan document import.
///
/// All variants are fatal; the importer never returns a partial inventory.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("schema error: {0}")]
    Schema(String),
}
