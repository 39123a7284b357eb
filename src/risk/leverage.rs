//! Required leverage advisory tiers

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the moderate tier
pub const MODERATE_LEVERAGE_MAX: Decimal = dec!(10);

/// Advisory tier for a required leverage figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeverageTier {
    /// Order fits inside the account (spot-equivalent)
    None,
    /// Above 1x, up to and including 10x
    Moderate,
    /// Above 10x
    High,
}

impl LeverageTier {
    /// Classify an already rounded, floored leverage figure
    pub fn classify(leverage: Decimal) -> Self {
        if leverage <= Decimal::ONE {
            LeverageTier::None
        } else if leverage <= MODERATE_LEVERAGE_MAX {
            LeverageTier::Moderate
        } else {
            LeverageTier::High
        }
    }

    /// Advisory message for this tier
    pub fn note(&self, order_value: Decimal, leverage: Decimal) -> String {
        match self {
            LeverageTier::None => "No leverage required".to_string(),
            LeverageTier::Moderate => format!(
                "Order value ({:.2} USDT) exceeds account size! Moderate leverage suggested: {:.1}x",
                order_value, leverage
            ),
            LeverageTier::High => format!(
                "Order value ({:.2} USDT) exceeds account size! High leverage required: {:.1}x",
                order_value, leverage
            ),
        }
    }
}
