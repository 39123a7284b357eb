//! Delete command implementation

use clap::Args;
use std::io::Write;

use crate::config::Config;
use crate::journal::{TradeLedger, TradeStore};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the trade to delete; later trades are renumbered
    pub id: u32,
}

impl DeleteArgs {
    pub fn execute(&self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        self.execute_with(&super::ledger(config), out)
    }

    pub fn execute_with<S: TradeStore>(
        &self,
        ledger: &TradeLedger<S>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        if !ledger.delete_trade(self.id)? {
            anyhow::bail!("No trade with ID {}", self.id);
        }
        writeln!(out, "Trade #{} deleted; remaining trades renumbered.", self.id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{MemoryStore, OpenTrade};
    use crate::risk::{Direction, RiskEngine};
    use rust_decimal_macros::dec;

    fn ledger_with_trades(pairs: &[&str]) -> TradeLedger<MemoryStore> {
        let ledger = TradeLedger::new(MemoryStore::new(), RiskEngine::default());
        for pair in pairs {
            ledger
                .open_trade(OpenTrade {
                    pair: pair.to_string(),
                    direction: Direction::Long,
                    account_size: dec!(1000),
                    risk_pct: dec!(2),
                    entry: dec!(25000),
                    stop_loss: dec!(24500),
                    maintenance_margin_rate: None,
                })
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_delete_reports_and_renumbers() {
        let ledger = ledger_with_trades(&["BTCUSDT", "ETHUSDT", "SOLUSDT"]);

        let mut out = Vec::new();
        DeleteArgs { id: 1 }.execute_with(&ledger, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Trade #1 deleted; remaining trades renumbered.\n"
        );
        let trades = ledger.store().load();
        assert_eq!(trades.len(), 2);
        assert_eq!((trades[0].id, trades[0].pair.as_str()), (1, "ETHUSDT"));
        assert_eq!((trades[1].id, trades[1].pair.as_str()), (2, "SOLUSDT"));
    }

    #[test]
    fn test_delete_unknown_id_fails() {
        let ledger = ledger_with_trades(&["BTCUSDT"]);

        let mut out = Vec::new();
        let err = DeleteArgs { id: 4 }
            .execute_with(&ledger, &mut out)
            .unwrap_err();

        assert_eq!(err.to_string(), "No trade with ID 4");
        assert!(out.is_empty());
        assert_eq!(ledger.store().load().len(), 1);
    }
}
