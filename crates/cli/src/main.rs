use arpscope_domain::{CliOverrides, OutputFormat};
use clap::{ArgGroup, Parser};
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "arpscope")]
#[command(version)]
#[command(about = "Arpscope - offline ARP cache inspector")]
#[command(group(ArgGroup::new("source").required(true).args(["snapshot", "table"])))]
struct Cli {
    /// Raw memory snapshot of the cache array (e.g. carved from a core file)
    #[arg(short = 's', long, value_name = "FILE")]
    snapshot: Option<String>,

    /// Kernel ARP table dump; with no value, the configured proc path
    #[arg(short = 't', long, value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
    table: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Include free/incomplete slots
    #[arg(short = 'a', long)]
    all: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        format: cli.format.clone(),
        include_free: cli.all.then_some(true),
        proc_arp_path: cli.table.clone().filter(|path| !path.is_empty()),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting arpscope v{}", env!("CARGO_PKG_VERSION"));

    let format: OutputFormat = config.output.format.parse()?;

    // Dependency injection - select the host source and build use cases
    let services = di::Services::new(&config, cli.snapshot.as_deref())?;

    match format {
        OutputFormat::Text => {
            let rendered = services.render_cache.execute()?;
            for line in &rendered.lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let entries = services.list_entries.execute()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
