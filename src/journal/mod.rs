//! Trade journal module
//!
//! Lifecycle of journaled trades (open, close, delete, list, history) on top
//! of a pluggable trade store.

mod analytics;
mod ledger;
mod store;
mod types;

pub use analytics::{HistorySummary, TradeHistory};
pub use ledger::TradeLedger;
pub use store::{JsonFileStore, MemoryStore};
pub use types::{JournalError, OpenTrade, Trade, TradeStatus};

/// Trait for trade storage backends
pub trait TradeStore {
    /// Load every trade in stored order; missing or unreadable data loads as empty
    fn load(&self) -> Vec<Trade>;
    /// Replace the stored collection with `trades`
    fn save(&self, trades: &[Trade]) -> Result<(), JournalError>;
}
