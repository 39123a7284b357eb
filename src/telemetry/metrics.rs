//! Journal gauges

use rust_decimal::prelude::ToPrimitive;

use crate::journal::HistorySummary;

/// Gauge metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeMetric {
    /// Realized P&L over closed trades
    RealizedPnl,
    /// Open trade count
    OpenTrades,
    /// Closed trade count
    ClosedTrades,
    /// Win rate percentage
    WinRate,
}

impl GaugeMetric {
    pub fn name(&self) -> &'static str {
        match self {
            GaugeMetric::RealizedPnl => "journal_realized_pnl_usd",
            GaugeMetric::OpenTrades => "journal_open_trades",
            GaugeMetric::ClosedTrades => "journal_closed_trades",
            GaugeMetric::WinRate => "journal_win_rate_pct",
        }
    }
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    tracing::debug!(metric = metric.name(), value = value, "Setting gauge");
}

/// Emit every journal gauge from a history summary
pub fn record_history(summary: &HistorySummary) {
    set_gauge(
        GaugeMetric::RealizedPnl,
        summary.net_pnl.to_f64().unwrap_or_default(),
    );
    set_gauge(GaugeMetric::OpenTrades, summary.open_trades as f64);
    set_gauge(GaugeMetric::ClosedTrades, summary.closed_trades as f64);
    set_gauge(
        GaugeMetric::WinRate,
        summary.win_rate.to_f64().unwrap_or_default(),
    );
}
