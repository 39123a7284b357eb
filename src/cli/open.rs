//! Open command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::io::Write;

use super::render;
use crate::config::Config;
use crate::journal::{OpenTrade, TradeLedger, TradeStore};
use crate::risk::Direction;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Trading pair (e.g. BTCUSDT)
    #[arg(long)]
    pub pair: String,

    /// Trade direction
    #[arg(long, value_enum)]
    pub direction: Direction,

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

    /// Maintenance margin rate override (e.g. 0.005)
    #[arg(long, value_parser = super::parse_rate)]
    pub mmr: Option<Decimal>,
}

impl OpenArgs {
    pub fn order(&self) -> OpenTrade {
        OpenTrade {
            pair: self.pair.trim().to_uppercase(),
            direction: self.direction,
            account_size: self.account,
            risk_pct: self.risk,
            entry: self.entry,
            stop_loss: self.stop,
            maintenance_margin_rate: self.mmr,
        }
    }

    pub fn execute(&self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        self.execute_with(&super::ledger(config), out)
    }

    pub fn execute_with<S: TradeStore>(
        &self,
        ledger: &TradeLedger<S>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let order = self.order();
        let request = order.sizing_request();
        let (trade, sizing) = ledger.open_trade_sized(order)?;

        write!(out, "{}", render::format_sizing(&request, &sizing))?;
        writeln!(out, "{}", render::format_opened(&trade))?;
        Ok(())
    }
}
