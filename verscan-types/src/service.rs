use serde::{Deserialize, Serialize};

/// Service/version attributes detected for an open port.
///
/// All fields default to the empty string; scan files routinely omit
/// product or version for services that only matched by port number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Service name (e.g., "ssh", "http").
    pub name: String,
    /// Product name (e.g., "OpenSSH", "Apache httpd").
    pub product: String,
    /// Version string (e.g., "8.9p1", "2.4.52").
    pub version: String,
    /// Extra info (e.g., "Ubuntu Linux; protocol 2.0").
    pub extrainfo: String,
    /// CPE identifier (e.g., "cpe:/a:openbsd:openssh:8.9p1").
    pub cpe: String,
}

impl ServiceRecord {
    /// True when version detection produced a usable version string.
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}
