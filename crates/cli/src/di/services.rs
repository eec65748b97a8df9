use arpscope_application::ports::RecordSource;
use arpscope_application::services::arp_registry;
use arpscope_application::use_cases::{ListEntriesUseCase, RenderCacheUseCase};
use arpscope_domain::Config;
use arpscope_infrastructure::snapshot::{ImageRecordSource, MemoryImage};
use arpscope_infrastructure::system::ProcArpSource;
use std::sync::Arc;
use tracing::debug;

pub struct Services {
    pub render_cache: RenderCacheUseCase,
    pub list_entries: ListEntriesUseCase,
}

impl Services {
    /// Builds the use cases over the selected host source. A snapshot path
    /// selects the image walker; otherwise the kernel table is read.
    pub fn new(config: &Config, snapshot_path: Option<&str>) -> anyhow::Result<Self> {
        let include_free = config.output.include_free;

        let source: Arc<dyn RecordSource> = match snapshot_path {
            Some(path) => {
                debug!(path, "Using snapshot source");
                let image = MemoryImage::open(path, config.layout.big_endian)?;
                Arc::new(ImageRecordSource::new(
                    image,
                    config.layout.clone(),
                    include_free,
                ))
            }
            None => {
                debug!(path = %config.sources.proc_arp_path, "Using kernel ARP table source");
                Arc::new(ProcArpSource::new(
                    config.sources.proc_arp_path.clone(),
                    include_free,
                ))
            }
        };

        let registry = Arc::new(arp_registry()?);

        Ok(Self {
            render_cache: RenderCacheUseCase::new(source.clone(), registry),
            list_entries: ListEntriesUseCase::new(source),
        })
    }
}
