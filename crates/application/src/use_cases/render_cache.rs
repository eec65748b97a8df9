use crate::ports::RecordSource;
use crate::printers::{StructDumpPrinter, ValuePrinter};
use crate::services::PrinterRegistry;
use arpscope_domain::InspectError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one rendering pass over the cache.
#[derive(Debug, Clone)]
pub struct RenderedCache {
    pub lines: Vec<String>,
    pub skipped: usize,
}

/// Use case: render every record a host source materializes
/// One undecodable slot must not hide the rest of the cache
pub struct RenderCacheUseCase {
    source: Arc<dyn RecordSource>,
    registry: Arc<PrinterRegistry>,
    fallback: StructDumpPrinter,
}

impl RenderCacheUseCase {
    pub fn new(source: Arc<dyn RecordSource>, registry: Arc<PrinterRegistry>) -> Self {
        Self {
            source,
            registry,
            fallback: StructDumpPrinter,
        }
    }

    pub fn execute(&self) -> Result<RenderedCache, InspectError> {
        debug!("Reading cache records");

        let records = self.source.read_records()?;
        debug!(records = records.len(), "Records materialized");

        let mut lines = Vec::with_capacity(records.len());
        let mut skipped = 0usize;
        for record in &records {
            let printed = match self.registry.resolve(record.type_tag()) {
                Some(printer) => printer.print(Some(record)),
                None => self.fallback.print(Some(record)),
            };

            match printed {
                Ok(line) => lines.push(line),
                Err(e) => {
                    warn!(error = %e, type_tag = record.type_tag(), "Failed to render record");
                    skipped += 1;
                }
            }
        }

        info!(total = records.len(), rendered = lines.len(), skipped, "Cache rendered");
        Ok(RenderedCache { lines, skipped })
    }
}
