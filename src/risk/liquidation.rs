//! Isolated-margin liquidation model
//!
//! A simplified approximation: margin is `order_value / leverage` and the
//! position is liquidated once losses eat it down to the maintenance margin.
//! Funding, auto-deleveraging and partial fills are ignored, so the figure is
//! an estimate rather than the price an exchange would actually use.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{Direction, RiskError};

/// Band edges, in percent of entry, between liquidation and the stop
pub const DANGER_DISTANCE_PCT: Decimal = dec!(2);
pub const RISKY_DISTANCE_PCT: Decimal = dec!(6);
pub const WATCH_DISTANCE_PCT: Decimal = dec!(15);

/// How close the stop-loss sits to the liquidation price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Danger,
    Risky,
    Watch,
    Safe,
}

impl WarningLevel {
    /// Band for a stop that triggers before liquidation
    pub fn from_distance_pct(distance_pct: Decimal) -> Self {
        if distance_pct < DANGER_DISTANCE_PCT {
            WarningLevel::Danger
        } else if distance_pct < RISKY_DISTANCE_PCT {
            WarningLevel::Risky
        } else if distance_pct < WATCH_DISTANCE_PCT {
            WarningLevel::Watch
        } else {
            WarningLevel::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningLevel::Danger => "danger",
            WarningLevel::Risky => "risky",
            WarningLevel::Watch => "watch",
            WarningLevel::Safe => "safe",
        }
    }
}

impl std::fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Liquidation price and stop-loss safety for one sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationAssessment {
    pub liquidation_price: Decimal,
    /// Stop-loss triggers before the position is liquidated
    pub stop_before_liquidation: bool,
    /// |liquidation - stop| / entry, in percent
    pub liquidation_distance_pct: Decimal,
    /// |stop - entry| / entry, in percent
    pub stop_drawdown_pct: Decimal,
    pub warning_level: WarningLevel,
    pub warning: String,
}

/// Price at which isolated margin is exhausted
///
/// A zero `leverage` is rejected; the sizing engine floors it at 1.
pub fn liquidation_price(
    direction: Direction,
    entry: Decimal,
    leverage: Decimal,
    mmr: Decimal,
) -> Result<Decimal, RiskError> {
    let out_of_range = || RiskError::out_of_range("Liquidation price");

    let inverse = Decimal::ONE.checked_div(leverage).ok_or_else(out_of_range)?;
    let maintenance = mmr.checked_div(leverage).ok_or_else(out_of_range)?;
    let factor = match direction {
        Direction::Long => Decimal::ONE
            .checked_sub(inverse)
            .and_then(|f| f.checked_add(maintenance)),
        Direction::Short => Decimal::ONE
            .checked_add(inverse)
            .and_then(|f| f.checked_sub(maintenance)),
    }
    .ok_or_else(out_of_range)?;

    entry.checked_mul(factor).ok_or_else(out_of_range)
}

/// `|a - b| / entry` in percent
fn pct_of_entry(a: Decimal, b: Decimal, entry: Decimal) -> Option<Decimal> {
    a.checked_sub(b)?
        .abs()
        .checked_div(entry)?
        .checked_mul(dec!(100))
}

/// Assess the stop-loss against the liquidation price
pub fn assess(
    direction: Direction,
    entry: Decimal,
    stop_loss: Decimal,
    leverage: Decimal,
    mmr: Decimal,
) -> Result<LiquidationAssessment, RiskError> {
    if entry.is_zero() {
        return Err(RiskError::InvalidParameters(
            "Entry price must be non-zero.".to_string(),
        ));
    }

    let liq = liquidation_price(direction, entry, leverage, mmr)?;
    let stop_before_liquidation = match direction {
        Direction::Long => stop_loss > liq,
        Direction::Short => stop_loss < liq,
    };

    let liquidation_distance_pct = pct_of_entry(liq, stop_loss, entry)
        .ok_or_else(|| RiskError::out_of_range("Liquidation distance"))?;
    let stop_drawdown_pct = pct_of_entry(stop_loss, entry, entry)
        .ok_or_else(|| RiskError::out_of_range("Stop drawdown"))?;

    let shown_pct = liquidation_distance_pct.round_dp(2);
    let (warning_level, warning) = if !stop_before_liquidation {
        (
            WarningLevel::Danger,
            "Stop loss is beyond liquidation price! Adjust stop loss or reduce leverage."
                .to_string(),
        )
    } else {
        let level = WarningLevel::from_distance_pct(liquidation_distance_pct);
        let message = match level {
            WarningLevel::Danger => format!(
                "Liquidation only {:.2}% away - high risk trade.",
                shown_pct
            ),
            WarningLevel::Risky => format!(
                "Liquidation {:.2}% away - tight margin.",
                shown_pct
            ),
            WarningLevel::Watch => format!(
                "Liquidation {:.2}% away - reasonable margin.",
                shown_pct
            ),
            WarningLevel::Safe => format!(
                "Stop loss is at a safe distance from liquidation price ({:.2}% away).",
                shown_pct
            ),
        };
        (level, message)
    };

    Ok(LiquidationAssessment {
        liquidation_price: liq,
        stop_before_liquidation,
        liquidation_distance_pct,
        stop_drawdown_pct,
        warning_level,
        warning,
    })
}
