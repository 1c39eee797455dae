use crate::pricing::NetworkParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkParams,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: "warn")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json" (default: "pretty")
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Label of the reference currency TRX is priced in (default: "USD")
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Load configuration from an optional file plus `TRC20_CALC__*` environment variables
///
/// A missing file is not an error; every value has a default.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("TRC20_CALC").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    let network = &cfg.network;
    let params = [
        ("energy_per_transfer", network.energy_per_transfer),
        ("bandwidth_per_transfer", network.bandwidth_per_transfer),
        ("energy_unit_price", network.energy_unit_price),
        ("bandwidth_unit_price", network.bandwidth_unit_price),
        ("energy_yield_per_staked_unit", network.energy_yield_per_staked_unit),
        ("recurring_service_fee", network.recurring_service_fee),
    ];

    for (name, value) in params {
        if value == 0 {
            anyhow::bail!("Network parameter '{}' must be positive", name);
        }
    }

    match cfg.logging.format.as_str() {
        "pretty" | "json" => {}
        other => anyhow::bail!("Invalid log format: {} (expected 'pretty' or 'json')", other),
    }

    if cfg.display.currency.trim().is_empty() {
        anyhow::bail!("Display currency cannot be empty");
    }

    Ok(())
}
