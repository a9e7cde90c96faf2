//! Worker configuration loading from file and environment variables.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use voxdesk_progress::StatusFlow;

/// Top-level worker configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where order files live.
    #[serde(default)]
    pub orders: OrdersConfig,

    /// Sweep schedule and status flow.
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Order storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersConfig {
    /// Directory holding `order_*.json` files.
    #[serde(default = "default_orders_dir")]
    pub dir: PathBuf,
}

/// Sweep configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Seconds between sweeps.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Status flow orders advance through. Defaults to the grocery delivery
    /// flow.
    #[serde(default)]
    pub flow: StatusFlow,
}

impl SweepConfig {
    /// The sweep interval, at least one second.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "voxdesk_progress=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_orders_dir() -> PathBuf {
    PathBuf::from("shared-data")
}

fn default_interval_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            dir: default_orders_dir(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            flow: StatusFlow::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `VOXDESK_ORDERS_DIR` overrides `orders.dir`
/// - `VOXDESK_SWEEP_INTERVAL_SECS` overrides `sweep.interval_secs`
/// - `VOXDESK_LOG_LEVEL` overrides `logging.level`
/// - `VOXDESK_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Applies `VOXDESK_*` overrides read through `lookup`.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = lookup("VOXDESK_ORDERS_DIR") {
        config.orders.dir = PathBuf::from(dir);
    }
    if let Some(interval) = lookup("VOXDESK_SWEEP_INTERVAL_SECS") {
        match interval.parse() {
            Ok(parsed) => config.sweep.interval_secs = parsed,
            Err(_) => {
                tracing::warn!(value = %interval, "ignoring invalid VOXDESK_SWEEP_INTERVAL_SECS")
            }
        }
    }
    if let Some(level) = lookup("VOXDESK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = lookup("VOXDESK_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
}
