pub mod error;
pub mod nmap;

pub use error::IngestError;
pub use nmap::{parse_nmap_file, parse_nmap_xml};
