//! Arpscope Infrastructure Layer
//!
//! Host adapters that materialize target records: raw memory snapshots and
//! the live kernel ARP table.
pub mod snapshot;
pub mod system;

pub use snapshot::{ImageRecordSource, MemoryImage};
pub use system::ProcArpSource;
