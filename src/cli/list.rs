//! List command implementation

use clap::Args;
use std::io::Write;

use super::render;
use crate::config::Config;
use crate::journal::{TradeLedger, TradeStore};

#[derive(Args, Debug)]
pub struct ListArgs {}

impl ListArgs {
    pub fn execute(&self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        self.execute_with(&super::ledger(config), out)
    }

    pub fn execute_with<S: TradeStore>(
        &self,
        ledger: &TradeLedger<S>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let trades = ledger.list_open_trades();
        write!(out, "{}", render::format_open_trades(&trades))?;
        Ok(())
    }
}
