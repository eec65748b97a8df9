mod printer_registry;

pub use printer_registry::{arp_registry, PrinterRegistry};
