//! Close command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::io::Write;

use super::render;
use crate::config::Config;
use crate::journal::{TradeLedger, TradeStore};

#[derive(Args, Debug)]
pub struct CloseArgs {
    /// ID of the open trade to close
    pub id: u32,

    /// Exit price
    #[arg(long, value_parser = super::parse_price)]
    pub exit: Decimal,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl CloseArgs {
    pub fn execute(&self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        self.execute_with(&super::ledger(config), out)
    }

    pub fn execute_with<S: TradeStore>(
        &self,
        ledger: &TradeLedger<S>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        match ledger.close_trade(self.id, self.exit, self.notes.clone())? {
            Some(trade) => writeln!(out, "{}", render::format_closed(&trade))?,
            None => anyhow::bail!("No open trade with ID {}", self.id),
        }
        Ok(())
    }
}
