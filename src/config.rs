//! Configuration types for trade-journal

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::risk::RoundingPolicy;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub fees: FeeConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Position sizing and liquidation model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Maintenance margin rate used by the isolated-margin liquidation model
    #[serde(default = "default_mmr")]
    pub maintenance_margin_rate: Decimal,

    /// Round quantity to whole units before deriving order value
    #[serde(default)]
    pub round_quantity: bool,

    /// Midpoint rule for leverage (1 dp) and quantity (0 dp) rounding
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

fn default_mmr() -> Decimal {
    Decimal::new(5, 3) // 0.005 = 0.5%
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            maintenance_margin_rate: default_mmr(),
            round_quantity: false,
            rounding: RoundingPolicy::default(),
        }
    }
}

/// Exchange fee rates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    #[serde(default = "default_taker_rate")]
    pub taker_rate: Decimal,
    #[serde(default = "default_maker_rate")]
    pub maker_rate: Decimal,
}

fn default_taker_rate() -> Decimal {
    Decimal::new(55, 5) // 0.00055
}
fn default_maker_rate() -> Decimal {
    Decimal::new(2, 4) // 0.0002
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            taker_rate: default_taker_rate(),
            maker_rate: default_maker_rate(),
        }
    }
}

/// Trade journal storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Path of the JSON trade log
    #[serde(default = "default_journal_path")]
    pub path: PathBuf,
}

fn default_journal_path() -> PathBuf {
    PathBuf::from("trades.json")
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: default_journal_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
