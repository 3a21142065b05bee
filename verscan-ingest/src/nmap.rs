//! nmap XML (-oX) scan document importer.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info};

use verscan_types::{HostEntry, Inventory, PortEntry, ServiceRecord};

use crate::error::IngestError;

/// Parse an nmap XML file into an inventory.
pub fn parse_nmap_file(path: impl AsRef<Path>) -> Result<Inventory, IngestError> {
    let path = path.as_ref();
    debug!("reading scan document: {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_nmap_xml(&content)
}

/// Parse nmap XML content into an inventory.
///
/// Single event-driven pass; the document is never held as a tree. Only
/// ports with a `service` child become inventory entries. Any structural
/// violation aborts the import, so callers never see a partial inventory.
pub fn parse_nmap_xml(xml: &str) -> Result<Inventory, IngestError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut inventory = Inventory::new();
    let mut saw_root = false;
    let mut host: Option<HostState> = None;
    let mut port: Option<PortState> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.name();
                check_root(name.as_ref(), &mut saw_root)?;
                match name.as_ref() {
                    b"host" => host = Some(HostState::default()),
                    b"address" => {
                        if let Some(h) = host.as_mut() {
                            first_address(h, &e)?;
                        }
                    }
                    b"port" => {
                        port = Some(PortState {
                            portid: attr(&e, "portid")?,
                            service: None,
                        });
                    }
                    b"service" => {
                        if let Some(p) = port.as_mut() {
                            p.service = Some(service_record(&e)?);
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let name = e.name();
                check_root(name.as_ref(), &mut saw_root)?;
                match name.as_ref() {
                    b"host" => {
                        return Err(IngestError::Schema(
                            "host element without an address".into(),
                        ));
                    }
                    b"address" => {
                        if let Some(h) = host.as_mut() {
                            first_address(h, &e)?;
                        }
                    }
                    b"service" => {
                        if let Some(p) = port.as_mut() {
                            p.service = Some(service_record(&e)?);
                        }
                    }
                    // A self-closing port has no service child; skip it.
                    _ => {}
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"port" => {
                    if let (Some(h), Some(p)) = (host.as_mut(), port.take())
                        && let Some(record) = p.service
                    {
                        let portid = p.portid.ok_or_else(|| {
                            IngestError::Schema(
                                "port element with a service child is missing 'portid'".into(),
                            )
                        })?;
                        h.ports.push(PortEntry {
                            port: portid,
                            record,
                        });
                    }
                }
                b"host" => {
                    if let Some(h) = host.take() {
                        let addr = h.addr.ok_or_else(|| {
                            IngestError::Schema("host element without an address".into())
                        })?;
                        let mut entry = HostEntry::new(addr);
                        for p in h.ports {
                            entry.insert(p.port, p.record);
                        }
                        inventory.insert_host(entry);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(IngestError::Schema(
            "document has no 'nmaprun' root element".into(),
        ));
    }

    info!(
        hosts = inventory.host_count(),
        services = inventory.service_count(),
        "scan inventory imported"
    );

    Ok(inventory)
}

#[derive(Debug, Default)]
struct HostState {
    addr: Option<String>,
    ports: Vec<PortEntry>,
}

#[derive(Debug)]
struct PortState {
    portid: Option<String>,
    service: Option<ServiceRecord>,
}

fn check_root(name: &[u8], saw_root: &mut bool) -> Result<(), IngestError> {
    if *saw_root {
        return Ok(());
    }
    if name == b"nmaprun" {
        *saw_root = true;
        Ok(())
    } else {
        Err(IngestError::Schema(format!(
            "root element is '{}', expected 'nmaprun'",
            String::from_utf8_lossy(name)
        )))
    }
}

/// Record the first address element seen for a host; later ones (e.g. the
/// MAC address following the IPv4 address) are ignored.
fn first_address(h: &mut HostState, e: &BytesStart) -> Result<(), IngestError> {
    if h.addr.is_some() {
        return Ok(());
    }
    let addr = attr(e, "addr")?.ok_or_else(|| {
        IngestError::Schema("address element missing 'addr' attribute".into())
    })?;
    h.addr = Some(addr);
    Ok(())
}

fn service_record(e: &BytesStart) -> Result<ServiceRecord, IngestError> {
    Ok(ServiceRecord {
        name: attr(e, "name")?.unwrap_or_default(),
        product: attr(e, "product")?.unwrap_or_default(),
        version: attr(e, "version")?.unwrap_or_default(),
        extrainfo: attr(e, "extrainfo")?.unwrap_or_default(),
        cpe: attr(e, "cpe")?.unwrap_or_default(),
    })
}

fn attr(e: &BytesStart, name: &str) -> Result<Option<String>, IngestError> {
    let value = e
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
        .map(|a| a.unescape_value().map(|v| v.into_owned()))
        .transpose()?;
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
