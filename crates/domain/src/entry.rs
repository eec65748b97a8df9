use crate::age::EntryAge;
use crate::errors::InspectError;
use crate::hwaddr::HwAddr;
use crate::record::{FieldValue, Record};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Type tag the target declares for cache slots.
pub const ARP_ENTRY_TAG: &str = "arp_cache_entry";

/// Hardware address of an entry, either decoded octets or text a textual
/// host already produced (the kernel table exports the latter).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HwDisplay {
    Addr(HwAddr),
    Text(String),
}

impl fmt::Display for HwDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HwDisplay::Addr(addr) => write!(f, "{}", addr),
            HwDisplay::Text(text) => f.write_str(text),
        }
    }
}

/// Decoded view of one ARP cache slot. A read-only value; nothing here
/// touches the inspected target.
#[derive(Debug, Clone, Serialize)]
pub struct ArpCacheEntry {
    pub ip_addr: Ipv4Addr,
    pub haddr: HwDisplay,
    pub age: EntryAge,
}

impl ArpCacheEntry {
    pub fn new(ip_addr: Ipv4Addr, haddr: HwDisplay, age: EntryAge) -> Self {
        Self {
            ip_addr,
            haddr,
            age,
        }
    }

    /// Decodes a host record. Field names follow the target struct:
    /// `ip_addr`, `haddr`, `age`.
    pub fn from_record(record: &Record) -> Result<Self, InspectError> {
        let ip_addr = Ipv4Addr::from(record.u32_field("ip_addr")?);
        let haddr = match record.field("haddr")? {
            FieldValue::HwAddr(addr) => HwDisplay::Addr(*addr),
            FieldValue::Text(text) => HwDisplay::Text(text.clone()),
            other => {
                return Err(InspectError::FieldType {
                    field: "haddr".to_string(),
                    expected: "hwaddr or text",
                    actual: other.kind(),
                })
            }
        };
        let age = EntryAge::from_raw(record.i32_field("age")?)?;
        Ok(Self {
            ip_addr,
            haddr,
            age,
        })
    }

    /// Whether the periodic sweep would discard this entry. Sentinel ages
    /// never expire.
    pub fn is_expired(&self, max_age_secs: u32) -> bool {
        matches!(self.age, EntryAge::Seconds(secs) if secs > max_age_secs)
    }
}

impl fmt::Display for ArpCacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}, age: {}", self.ip_addr, self.haddr, self.age)
    }
}

/// Renders one cache slot reference.
///
/// An absent reference prints as `NULL`; that check precedes any field
/// access. A present entry prints as `<ip> at <haddr>, age: <age>`.
pub fn format_entry(entry: Option<&ArpCacheEntry>) -> String {
    match entry {
        None => "NULL".to_string(),
        Some(entry) => entry.to_string(),
    }
}
