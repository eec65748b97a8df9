#![allow(dead_code)]
use arpscope_domain::{FieldValue, HwAddr, Record, ARP_ENTRY_TAG};

/// Builds the record an image-backed host materializes for one cache slot.
pub fn arp_record(ip: u32, mac: [u8; 6], age: i32) -> Record {
    Record::new(ARP_ENTRY_TAG)
        .with_field("ip_addr", FieldValue::U32(ip))
        .with_field("haddr", FieldValue::HwAddr(HwAddr::new(mac)))
        .with_field("age", FieldValue::I32(age))
}
