//! Journal analytics and reporting

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::types::Trade;

/// Aggregate statistics over the journal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    /// Every trade in the journal
    pub total_trades: usize,
    pub open_trades: usize,
    pub closed_trades: usize,
    /// Closed trades with positive net P&L
    pub winning_trades: usize,
    /// Sum of net P&L over closed trades
    pub net_pnl: Decimal,
    /// Winning / closed, in percent; zero with nothing closed
    pub win_rate: Decimal,
}

/// Summary plus the trades it was computed from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TradeHistory {
    pub summary: HistorySummary,
    pub trades: Vec<Trade>,
}

impl HistorySummary {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        let net_pnl: Decimal = closed.iter().filter_map(|t| t.net_pnl).sum();
        let winning_trades = closed
            .iter()
            .filter(|t| t.net_pnl.is_some_and(|pnl| pnl > Decimal::ZERO))
            .count();

        let win_rate = if closed.is_empty() {
            Decimal::ZERO
        } else {
            Decimal::from(winning_trades) / Decimal::from(closed.len()) * dec!(100)
        };

        Self {
            total_trades: trades.len(),
            open_trades: trades.len() - closed.len(),
            closed_trades: closed.len(),
            winning_trades,
            net_pnl,
            win_rate,
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               TRADE ANALYTICS
══════════════════════════════════════════════════════
Total Trades:     {}
Open Trades:      {}
Closed Trades:    {}
Net P&L:          {:+.2} USDT
Win Rate:         {:.2}%
══════════════════════════════════════════════════════
"#,
            self.total_trades,
            self.open_trades,
            self.closed_trades,
            self.net_pnl.round_dp(2),
            self.win_rate.round_dp(2),
        )
    }
}

impl TradeHistory {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self {
            summary: HistorySummary::from_trades(&trades),
            trades,
        }
    }
}
