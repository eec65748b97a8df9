use arpscope_domain::Config;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. `RUST_LOG` wins over the configured
/// level. Diagnostics go to stderr; stdout carries only rendered output.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
