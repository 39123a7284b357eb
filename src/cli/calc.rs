//! Calc command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::io::Write;

use super::render;
use super::OutputFormat;
use crate::config::Config;
use crate::risk::{Direction, SizingRequest};

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Account size in USDT
    #[arg(long, value_parser = super::parse_account_size)]
    pub account: Decimal,

    /// Risk per trade in percent (e.g. 1-3)
    #[arg(long, value_parser = super::parse_risk_pct)]
    pub risk: Decimal,

    /// Entry price
    #[arg(long, value_parser = super::parse_price)]
    pub entry: Decimal,

    /// Stop loss price
    #[arg(long, value_parser = super::parse_price)]
    pub stop: Decimal,

    /// Trade direction; enables the liquidation check
    #[arg(long, value_enum)]
    pub direction: Option<Direction>,

    /// Maintenance margin rate override (e.g. 0.005)
    #[arg(long, value_parser = super::parse_rate)]
    pub mmr: Option<Decimal>,

    /// Round quantity to whole units
    #[arg(long)]
    pub round_quantity: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl CalcArgs {
    pub fn request(&self) -> SizingRequest {
        SizingRequest {
            account_size: self.account,
            risk_pct: self.risk,
            entry: self.entry,
            stop_loss: self.stop,
            direction: self.direction,
            maintenance_margin_rate: self.mmr,
        }
    }

    pub fn execute(&self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        let mut engine = super::engine(config);
        if self.round_quantity {
            engine = engine.with_round_quantity(true);
        }

        let request = self.request();
        let result = engine.compute_sizing(&request)?;

        match self.format {
            OutputFormat::Table => write!(out, "{}", render::format_sizing(&request, &result))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        }
        Ok(())
    }
}
