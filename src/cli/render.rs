//! Plain-text rendering of sizing results and trades

use rust_decimal::Decimal;

use crate::journal::Trade;
use crate::risk::{SizingRequest, SizingResult};

const RULE: &str = "──────────────────────────────────────────────────────";

fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Round half-even to `dp` places, then print exactly `dp` places
fn fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, value.round_dp(dp))
}

fn signed(value: Option<Decimal>) -> String {
    value
        .map(|v| format!("{:+.2}", v.round_dp(2)))
        .unwrap_or_else(|| "-".to_string())
}

/// Sizing summary shown before a trade is recorded
pub fn format_sizing(request: &SizingRequest, result: &SizingResult) -> String {
    let mut out = String::new();
    out.push_str("POSITION SIZING\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Entry:            {}\n", request.entry));
    out.push_str(&format!("Stop Loss:        {}\n", request.stop_loss));
    if let Some(direction) = request.direction {
        out.push_str(&format!("Direction:        {}\n", direction.as_str().to_uppercase()));
    }
    out.push_str(&format!("Risk Amount:      {} USDT\n", fixed(result.risk_amount, 2)));
    out.push_str(&format!("Stop Distance:    {}\n", result.stop_distance));
    out.push_str(&format!("Quantity:         {}\n", fixed(result.quantity, 4)));
    out.push_str(&format!("Order Value:      {} USDT\n", fixed(result.order_value, 2)));
    out.push_str(&format!("Leverage:         {}x\n", fixed(result.required_leverage, 1)));
    out.push_str(&format!("                  {}\n", result.leverage_note));

    if let Some(liq) = &result.liquidation {
        out.push_str(&format!("Liquidation:      {}\n", fixed(liq.liquidation_price, 2)));
        out.push_str(&format!(
            "                  [{}] {}\n",
            liq.warning_level, liq.warning
        ));
        out.push_str(&format!(
            "                  Stop drawdown: {}% | Liquidation distance: {}%\n",
            fixed(liq.stop_drawdown_pct, 2),
            fixed(liq.liquidation_distance_pct, 2)
        ));
    }

    out.push_str(&format!("Taker Fee:        {} USDT\n", fixed(result.taker_fee, 2)));
    out.push_str(&format!("Maker Fee:        {} USDT\n", fixed(result.maker_fee, 2)));
    out
}

/// One-line confirmation after opening
pub fn format_opened(trade: &Trade) -> String {
    format!(
        "Trade #{} opened: {} | Dir: {} | Qty: {} | Lev: {}x | Risk: {} USDT",
        trade.id,
        trade.pair,
        trade.direction.as_str().to_uppercase(),
        fixed(trade.quantity, 4),
        fixed(trade.required_leverage, 1),
        fixed(trade.risk_amount, 2),
    )
}

/// One-line confirmation after closing
pub fn format_closed(trade: &Trade) -> String {
    format!(
        "Trade #{} closed at {}: gross {} | fees {} | net {} USDT",
        trade.id,
        or_dash(trade.exit_price),
        signed(trade.gross_pnl),
        trade
            .fees_paid
            .map(|f| fixed(f, 2))
            .unwrap_or_else(|| "-".to_string()),
        signed(trade.net_pnl),
    )
}

/// Table of open trades
pub fn format_open_trades(trades: &[Trade]) -> String {
    if trades.is_empty() {
        return "No open trades found.\n".to_string();
    }

    let mut out = format!(
        "{:>4}  {:<12} {:<6} {:>14} {:>14} {:>12} {:>6}\n",
        "ID", "Pair", "Dir", "Entry", "Stop", "Qty", "Lev"
    );
    for t in trades {
        out.push_str(&format!(
            "{:>4}  {:<12} {:<6} {:>14} {:>14} {:>12} {:>5}x\n",
            t.id,
            t.pair,
            t.direction.as_str().to_uppercase(),
            t.entry.to_string(),
            t.stop_loss.to_string(),
            fixed(t.quantity, 4),
            fixed(t.required_leverage, 1),
        ));
    }
    out
}

/// Table of every trade in the journal
pub fn format_history(trades: &[Trade]) -> String {
    if trades.is_empty() {
        return "No trade history found.\n".to_string();
    }

    let mut out = format!(
        "{:>4}  {:<12} {:<6} {:<7} {:>14} {:>14} {:>12}  {}\n",
        "ID", "Pair", "Dir", "Status", "Entry", "Exit", "Net PnL", "Notes"
    );
    for t in trades {
        let notes = t
            .notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("-");
        out.push_str(&format!(
            "{:>4}  {:<12} {:<6} {:<7} {:>14} {:>14} {:>12}  {}\n",
            t.id,
            t.pair,
            t.direction.as_str().to_uppercase(),
            t.status.to_string(),
            t.entry.to_string(),
            or_dash(t.exit_price),
            signed(t.net_pnl),
            notes,
        ));
    }
    out
}
