use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::service::ServiceRecord;

/// A service-bearing port on a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortEntry {
    /// Port number as it appeared in the scan document (e.g., "443").
    pub port: String,
    pub record: ServiceRecord,
}

/// All service-bearing ports detected on a single host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Host address (e.g., "192.168.1.10").
    pub addr: String,
    pub ports: Vec<PortEntry>,
}

impl HostEntry {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ports: Vec::new(),
        }
    }

    /// Insert a record for a port, replacing any existing record in place.
    pub fn insert(&mut self, port: impl Into<String>, record: ServiceRecord) {
        let port = port.into();
        if let Some(existing) = self.ports.iter_mut().find(|p| p.port == port) {
            existing.record = record;
        } else {
            self.ports.push(PortEntry { port, record });
        }
    }

    pub fn get(&self, port: &str) -> Option<&ServiceRecord> {
        self.ports.iter().find(|p| p.port == port).map(|p| &p.record)
    }
}

/// Detected services keyed by host address and port number.
///
/// Hosts and ports iterate in insertion order. A duplicate host address
/// replaces the earlier entry in place, keeping its original position.
/// Serializes as a nested JSON mapping: host -> port -> record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    hosts: Vec<HostEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a host, replacing any existing host with the same address.
    /// Replacement keeps the first occurrence's position.
    pub fn insert_host(&mut self, host: HostEntry) {
        if let Some(existing) = self.hosts.iter_mut().find(|h| h.addr == host.addr) {
            *existing = host;
        } else {
            self.hosts.push(host);
        }
    }

    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }

    pub fn get(&self, addr: &str) -> Option<&HostEntry> {
        self.hosts.iter().find(|h| h.addr == addr)
    }

    /// Number of distinct hosts.
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    /// Total number of service-bearing port entries across all hosts.
    pub fn service_count(&self) -> usize {
        self.hosts.iter().map(|h| h.ports.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Iterate every (host, port, record) triple in insertion order.
    pub fn iter_records(&self) -> impl Iterator<Item = (&str, &str, &ServiceRecord)> {
        self.hosts.iter().flat_map(|h| {
            h.ports
                .iter()
                .map(move |p| (h.addr.as_str(), p.port.as_str(), &p.record))
        })
    }
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.hosts.len()))?;
        for host in &self.hosts {
            map.serialize_entry(&host.addr, &PortsAsMap(&host.ports))?;
        }
        map.end()
    }
}

struct PortsAsMap<'a>(&'a [PortEntry]);

impl Serialize for PortsAsMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.port, &entry.record)?;
        }
        map.end()
    }
}
