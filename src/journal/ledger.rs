//! Trade lifecycle operations
//!
//! Every operation is a full read-modify-write of the store. There is no
//! locking: two processes working the same journal will lose updates
//! (last writer wins). Run one ledger per journal file.

use chrono::{Local, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;

use super::analytics::TradeHistory;
use super::types::{JournalError, OpenTrade, Trade};
use super::TradeStore;
use crate::risk::{RiskEngine, SizingResult};

/// Id of the trade at zero-based `index`
fn trade_id(index: usize) -> Result<u32, JournalError> {
    index
        .checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(JournalError::IdOverflow)
}

/// Sole mutator of the journaled trades
pub struct TradeLedger<S: TradeStore> {
    store: S,
    engine: RiskEngine,
}

impl<S: TradeStore> TradeLedger<S> {
    pub fn new(store: S, engine: RiskEngine) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &RiskEngine {
        &self.engine
    }

    /// Size and record a new open trade
    pub fn open_trade(&self, order: OpenTrade) -> Result<Trade, JournalError> {
        self.open_trade_at(order, Local::now().naive_local().trunc_subsecs(0))
    }

    /// Size and record a new open trade with an explicit timestamp
    pub fn open_trade_at(&self, order: OpenTrade, date: NaiveDateTime) -> Result<Trade, JournalError> {
        self.open_sized_at(order, date).map(|(trade, _)| trade)
    }

    /// Size and record a new open trade, returning the sizing it was recorded with
    pub fn open_trade_sized(&self, order: OpenTrade) -> Result<(Trade, SizingResult), JournalError> {
        self.open_sized_at(order, Local::now().naive_local().trunc_subsecs(0))
    }

    fn open_sized_at(
        &self,
        order: OpenTrade,
        date: NaiveDateTime,
    ) -> Result<(Trade, SizingResult), JournalError> {
        let sizing = self.engine.compute_sizing(&order.sizing_request())?;

        let mut trades = self.store.load();
        let id = trade_id(trades.len())?;
        let trade = Trade::open(id, date, &order, &sizing);
        trades.push(trade.clone());
        self.store.save(&trades)?;

        tracing::info!(
            id,
            pair = %trade.pair,
            direction = %trade.direction,
            quantity = %trade.quantity,
            leverage = %trade.required_leverage,
            "Opened trade"
        );
        Ok((trade, sizing))
    }

    /// Close an open trade at `exit_price`
    ///
    /// Returns `Ok(None)` when no open trade has this id, including when the
    /// trade exists but is already closed.
    pub fn close_trade(
        &self,
        id: u32,
        exit_price: Decimal,
        notes: Option<String>,
    ) -> Result<Option<Trade>, JournalError> {
        let mut trades = self.store.load();

        let Some(trade) = trades.iter_mut().find(|t| t.id == id && t.is_open()) else {
            tracing::debug!(id, "No open trade to close");
            return Ok(None);
        };
        trade.close(exit_price, notes, &self.engine.fees)?;
        let closed = trade.clone();

        self.store.save(&trades)?;

        tracing::info!(
            id,
            exit_price = %exit_price,
            net_pnl = ?closed.net_pnl,
            "Closed trade"
        );
        Ok(Some(closed))
    }

    /// Delete a trade and renumber the rest `1..=N` in their existing order
    ///
    /// Returns `false`, without writing, when no trade has this id.
    pub fn delete_trade(&self, id: u32) -> Result<bool, JournalError> {
        let trades = self.store.load();
        let before = trades.len();

        let mut remaining: Vec<Trade> = trades.into_iter().filter(|t| t.id != id).collect();
        if remaining.len() == before {
            tracing::debug!(id, "No trade to delete");
            return Ok(false);
        }

        for (index, trade) in remaining.iter_mut().enumerate() {
            trade.id = trade_id(index)?;
        }
        self.store.save(&remaining)?;

        tracing::info!(id, remaining = remaining.len(), "Deleted trade");
        Ok(true)
    }

    /// Open trades in journal order
    pub fn list_open_trades(&self) -> Vec<Trade> {
        self.store
            .load()
            .into_iter()
            .filter(|t| t.is_open())
            .collect()
    }

    /// All trades with aggregate statistics
    pub fn view_history(&self) -> TradeHistory {
        TradeHistory::new(self.store.load())
    }
}
