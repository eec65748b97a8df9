//! Arpscope Domain Layer
pub mod age;
pub mod config;
pub mod entry;
pub mod errors;
pub mod hwaddr;
pub mod record;

pub use age::{AgeSentinel, EntryAge, DEFAULT_MAX_AGE_SECS};
pub use config::{CliOverrides, Config, ConfigError, LayoutConfig, OutputFormat};
pub use entry::{format_entry, ArpCacheEntry, HwDisplay, ARP_ENTRY_TAG};
pub use errors::InspectError;
pub use hwaddr::HwAddr;
pub use record::{FieldValue, Record};
