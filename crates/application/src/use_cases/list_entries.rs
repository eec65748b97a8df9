use crate::ports::RecordSource;
use arpscope_domain::{ArpCacheEntry, InspectError, ARP_ENTRY_TAG};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Use case: decode the source's `arp_cache_entry` records into typed
/// entries, for structured output
pub struct ListEntriesUseCase {
    source: Arc<dyn RecordSource>,
}

impl ListEntriesUseCase {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub fn execute(&self) -> Result<Vec<ArpCacheEntry>, InspectError> {
        let records = self.source.read_records()?;

        let mut entries = Vec::with_capacity(records.len());
        for record in &records {
            if record.type_tag() != ARP_ENTRY_TAG {
                debug!(type_tag = record.type_tag(), "Skipping non-ARP record");
                continue;
            }
            match ArpCacheEntry::from_record(record) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(error = %e, "Failed to decode cache slot");
                }
            }
        }

        info!(total = records.len(), decoded = entries.len(), "Cache decoded");
        Ok(entries)
    }
}
