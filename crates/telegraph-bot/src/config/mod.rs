pub mod types;
use crate::error::Result;
use types::CONFIG_PATH;
pub use types::{ApiConfig, CONFIG, Config, NetworkConfig};

impl Config {
    /// Load the file named by `TELEGRAPH_BOT_CONFIG`, or fall back to defaults
    pub fn new() -> Self {
        get_config().unwrap_or_default()
    }
}

/// Read and parse the configuration file named by `TELEGRAPH_BOT_CONFIG`
///
/// ## Errors
/// - `BotError::Config` - variable not set or invalid TOML
/// - `BotError::Io` - file cannot be read
pub fn get_config() -> Result<Config> {
    let path = std::env::var(CONFIG_PATH)?;
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}
