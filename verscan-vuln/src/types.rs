// ---------------------------------------------------------------------------
// Vulnerability types
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

/// Severity level for findings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Low severity, minimal risk.
    Low,
    /// Medium severity, moderate risk.
    Medium,
    /// High severity, significant risk.
    High,
    /// Critical severity, immediate action required.
    Critical,
}

impl Severity {
    /// Numeric value for sorting/comparison.
    pub fn as_number(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A known-vulnerable product/version pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// CVE identifier (e.g., "CVE-2021-44228").
    pub id: String,
    /// Product substring to look for in detected services (case sensitive).
    pub product: String,
    /// Affected version pattern; only the first digit run takes part in
    /// matching.
    pub affected_versions: String,
    pub severity: Severity,
}

/// A single rule hit against an inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub ip: String,
    pub port: String,
    /// Product string of the matched service.
    pub service: String,
    /// Detected version string.
    pub version: String,
    /// CVE identifier of the matching rule.
    pub cve: String,
    pub severity: Severity,
}
