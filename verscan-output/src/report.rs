use chrono::{DateTime, Utc};
use serde::Serialize;

use verscan_types::Inventory;
use verscan_vuln::Finding;

/// The analysis result aggregate, serialized as-is into report files.
///
/// Built once per run; the field names are part of the report file format.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scan_date: DateTime<Utc>,
    /// Number of distinct host addresses in the inventory.
    pub hosts: usize,
    /// Total number of service-bearing port entries.
    pub services: usize,
    pub vulnerabilities: Vec<Finding>,
    pub version_details: Inventory,
}

impl Report {
    pub fn build(inventory: Inventory, findings: Vec<Finding>) -> Self {
        Self {
            scan_date: Utc::now(),
            hosts: inventory.host_count(),
            services: inventory.service_count(),
            vulnerabilities: findings,
            version_details: inventory,
        }
    }
}
