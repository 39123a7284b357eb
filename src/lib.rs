//! trade-journal: Position sizing and trade journal for leveraged crypto trading
//!
//! This library provides the core components for:
//! - Risk-based position sizing with leverage advisories
//! - Isolated-margin liquidation estimates and stop-loss safety checks
//! - Taker/maker fee accounting
//! - A JSON trade journal with open/close/delete lifecycle and realized P&L
//! - Journal analytics (net P&L, win rate)
//! - CLI, configuration and logging

pub mod cli;
pub mod config;
pub mod journal;
pub mod risk;
pub mod telemetry;
