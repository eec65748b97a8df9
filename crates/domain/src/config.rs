use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// In-memory layout of the target's `arp_cache[]` array.
///
/// The defaults describe the stack built for LP64 Linux: 4-byte IP at the
/// struct start, 6-byte hardware address behind it, the signed age after
/// 2 bytes of padding, and tree linkage padding the slot out to 48 bytes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_entry_size")]
    pub entry_size: usize,
    #[serde(default = "default_ip_addr_offset")]
    pub ip_addr_offset: usize,
    #[serde(default = "default_haddr_offset")]
    pub haddr_offset: usize,
    #[serde(default = "default_age_offset")]
    pub age_offset: usize,
    #[serde(default = "default_false")]
    pub big_endian: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default = "default_proc_arp_path")]
    pub proc_arp_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
    #[serde(default = "default_false")]
    pub include_free: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Field widths inside one slot, used for layout validation.
const IP_ADDR_WIDTH: usize = 4;
const HADDR_WIDTH: usize = 6;
const AGE_WIDTH: usize = 4;

fn default_capacity() -> usize { 50 }
fn default_entry_size() -> usize { 48 }
fn default_ip_addr_offset() -> usize { 0 }
fn default_haddr_offset() -> usize { 4 }
fn default_age_offset() -> usize { 12 }
fn default_proc_arp_path() -> String { "/proc/net/arp".to_string() }
fn default_output_format() -> String { "text".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_false() -> bool { false }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            entry_size: default_entry_size(),
            ip_addr_offset: default_ip_addr_offset(),
            haddr_offset: default_haddr_offset(),
            age_offset: default_age_offset(),
            big_endian: false,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            proc_arp_path: default_proc_arp_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            include_free: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            sources: SourcesConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else {
            if std::path::Path::new("arpscope.toml").exists() {
                Self::from_file("arpscope.toml")?
            } else if std::path::Path::new("/etc/arpscope/config.toml").exists() {
                Self::from_file("/etc/arpscope/config.toml")?
            } else {
                Self::default()
            }
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(include_free) = overrides.include_free {
            self.output.include_free = include_free;
        }
        if let Some(path) = overrides.proc_arp_path {
            self.sources.proc_arp_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.capacity == 0 {
            return Err(ConfigError::Validation("layout.capacity cannot be 0".to_string()));
        }
        if self.layout.entry_size == 0 {
            return Err(ConfigError::Validation("layout.entry_size cannot be 0".to_string()));
        }
        Self::check_extent("ip_addr", self.layout.ip_addr_offset, IP_ADDR_WIDTH, self.layout.entry_size)?;
        Self::check_extent("haddr", self.layout.haddr_offset, HADDR_WIDTH, self.layout.entry_size)?;
        Self::check_extent("age", self.layout.age_offset, AGE_WIDTH, self.layout.entry_size)?;
        self.output.format.parse::<OutputFormat>()?;
        Ok(())
    }

    fn check_extent(field: &str, offset: usize, width: usize, entry_size: usize) -> Result<(), ConfigError> {
        if offset.checked_add(width).map_or(true, |end| end > entry_size) {
            return Err(ConfigError::Validation(format!(
                "layout.{}_offset {} overruns entry_size {}",
                field, offset, entry_size
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Validation(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub format: Option<String>,
    pub include_free: Option<bool>,
    pub proc_arp_path: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Configuration validation error: {0}")]
    Validation(String),
}
