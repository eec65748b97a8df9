mod arp;
mod struct_dump;

pub use arp::{ArpEntryPrinter, ARP_ENTRY_PATTERN};
pub use struct_dump::StructDumpPrinter;

use arpscope_domain::{InspectError, Record};

/// Renders one materialized record as a display line.
///
/// `None` stands for a null reference and must render as `NULL` before any
/// field is touched.
pub trait ValuePrinter: Send + Sync {
    fn print(&self, value: Option<&Record>) -> Result<String, InspectError>;
}
