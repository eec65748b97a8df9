use super::ValuePrinter;
use arpscope_domain::{format_entry, ArpCacheEntry, InspectError, Record};

/// Type-tag pattern the stock registry binds this printer under.
pub const ARP_ENTRY_PATTERN: &str = "^arp_cache_entry$";

/// Pretty-printer for `arp_cache_entry` records.
///
/// Output follows the long-standing debugger rendering:
/// `192.168.0.1 at aa:bb:cc:dd:ee:ff, age: 42`, with sentinel ages shown
/// by enumerator name.
pub struct ArpEntryPrinter;

impl ValuePrinter for ArpEntryPrinter {
    fn print(&self, value: Option<&Record>) -> Result<String, InspectError> {
        let record = match value {
            None => return Ok(format_entry(None)),
            Some(record) => record,
        };

        let entry = ArpCacheEntry::from_record(record)?;
        Ok(format_entry(Some(&entry)))
    }
}
