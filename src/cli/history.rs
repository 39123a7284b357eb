//! History command implementation

use clap::Args;
use std::io::Write;

use super::render;
use super::OutputFormat;
use crate::config::Config;
use crate::journal::{TradeLedger, TradeStore};
use crate::telemetry;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl HistoryArgs {
    pub fn execute(&self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        self.execute_with(&super::ledger(config), out)
    }

    pub fn execute_with<S: TradeStore>(
        &self,
        ledger: &TradeLedger<S>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let history = ledger.view_history();
        telemetry::record_history(&history.summary);

        match self.format {
            OutputFormat::Table => {
                write!(out, "{}", history.summary.format_table())?;
                write!(out, "{}", render::format_history(&history.trades))?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&history)?)?;
            }
        }
        Ok(())
    }
}
