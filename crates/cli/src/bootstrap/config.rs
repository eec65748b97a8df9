use arpscope_domain::{CliOverrides, Config, ConfigError};

/// Loads and validates the effective configuration. Runs before logging is
/// up, so failures surface only through the returned error.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
