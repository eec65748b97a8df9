pub mod proc_arp_source;

pub use proc_arp_source::ProcArpSource;
