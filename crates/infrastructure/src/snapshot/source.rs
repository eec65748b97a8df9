use super::MemoryImage;
use arpscope_application::ports::RecordSource;
use arpscope_domain::{
    config::LayoutConfig, AgeSentinel, FieldValue, HwAddr, InspectError, Record, ARP_ENTRY_TAG,
};
use tracing::debug;

/// Walks the target's fixed-size `arp_cache[]` array inside a memory image
/// and materializes one record per slot.
///
/// Slot `i` starts at `i * entry_size`; field offsets come from the layout.
/// An image holding fewer complete slots than the configured capacity yields
/// only those slots, so a partial extraction still renders.
pub struct ImageRecordSource {
    image: MemoryImage,
    layout: LayoutConfig,
    include_free: bool,
}

impl ImageRecordSource {
    pub fn new(image: MemoryImage, layout: LayoutConfig, include_free: bool) -> Self {
        Self {
            image,
            layout,
            include_free,
        }
    }

    fn read_slot(&self, base: usize) -> Result<Record, InspectError> {
        let ip_addr = self.image.u32_at(base + self.layout.ip_addr_offset)?;
        let haddr = HwAddr::from_slice(
            self.image
                .bytes_at(base + self.layout.haddr_offset, HwAddr::LEN)?,
        )?;
        let age = self.image.i32_at(base + self.layout.age_offset)?;

        Ok(Record::new(ARP_ENTRY_TAG)
            .with_field("ip_addr", FieldValue::U32(ip_addr))
            .with_field("haddr", FieldValue::HwAddr(haddr))
            .with_field("age", FieldValue::I32(age)))
    }
}

impl RecordSource for ImageRecordSource {
    fn read_records(&self) -> Result<Vec<Record>, InspectError> {
        let stride = self.layout.entry_size;
        let complete_slots = self.image.len() / stride;
        let slots = complete_slots.min(self.layout.capacity);
        if slots < self.layout.capacity {
            debug!(
                slots,
                capacity = self.layout.capacity,
                "Image holds fewer slots than the configured capacity"
            );
        }

        let mut records = Vec::with_capacity(slots);
        for i in 0..slots {
            let base = i * stride;
            let age = self.image.i32_at(base + self.layout.age_offset)?;
            if !self.include_free && age == AgeSentinel::Free.code() {
                continue;
            }
            records.push(self.read_slot(base)?);
        }

        debug!(slots, records = records.len(), "Snapshot walked");
        Ok(records)
    }
}
