//! CLI interface for trade-journal
//!
//! Provides subcommands for:
//! - `calc`: Size a trade without recording it
//! - `open`: Size and record a new trade
//! - `close`: Close an open trade at an exit price
//! - `delete`: Remove a trade and renumber the rest
//! - `list`: Show open trades
//! - `history`: Show all trades with analytics
//! - `config`: Show effective configuration

mod calc;
mod close;
mod delete;
mod history;
mod list;
mod open;
pub mod render;

pub use calc::CalcArgs;
pub use close::CloseArgs;
pub use delete::DeleteArgs;
pub use history::HistoryArgs;
pub use list::ListArgs;
pub use open::OpenArgs;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;

use crate::config::Config;
use crate::journal::{JsonFileStore, TradeLedger};
use crate::risk::RiskEngine;

#[derive(Parser, Debug)]
#[command(name = "trade-journal")]
#[command(about = "Position sizing, liquidation checks and trade journal for leveraged crypto trading")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// Path to the trade log, overriding the configured one
    #[arg(short, long, global = true)]
    pub journal: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Size a trade without recording it
    Calc(CalcArgs),
    /// Size and record a new trade
    Open(OpenArgs),
    /// Close an open trade
    Close(CloseArgs),
    /// Delete a trade
    Delete(DeleteArgs),
    /// Show open trades
    List(ListArgs),
    /// Show trade history and analytics
    History(HistoryArgs),
    /// Show effective configuration
    Config,
}

/// Output format for reporting commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Risk engine configured from `config`
pub fn engine(config: &Config) -> RiskEngine {
    RiskEngine::from_config(&config.risk, &config.fees)
}

/// Ledger over the configured JSON trade log
pub fn ledger(config: &Config) -> TradeLedger<JsonFileStore> {
    TradeLedger::new(JsonFileStore::new(&config.journal.path), engine(config))
}

fn parse_at_least(value: &str, min: Decimal) -> Result<Decimal, String> {
    let parsed: Decimal = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", value))?;
    if parsed < min {
        return Err(format!("value must be >= {}", min));
    }
    Ok(parsed)
}

/// Account size, at least 0.01
pub(crate) fn parse_account_size(value: &str) -> Result<Decimal, String> {
    parse_at_least(value, dec!(0.01))
}

/// Risk percent, at least 0.01
pub(crate) fn parse_risk_pct(value: &str) -> Result<Decimal, String> {
    parse_at_least(value, dec!(0.01))
}

/// Price, at least 0.0001
pub(crate) fn parse_price(value: &str) -> Result<Decimal, String> {
    parse_at_least(value, dec!(0.0001))
}

/// Maintenance margin rate, non-negative
pub(crate) fn parse_rate(value: &str) -> Result<Decimal, String> {
    parse_at_least(value, Decimal::ZERO)
}
