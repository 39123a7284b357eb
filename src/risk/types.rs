//! Risk engine types

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Risk engine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RiskError {
    /// Inputs from which no meaningful size can be computed
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

impl RiskError {
    /// Arithmetic on `what` left the representable decimal range
    pub fn out_of_range(what: &str) -> Self {
        RiskError::InvalidParameters(format!("{} is out of range.", what))
    }
}

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "Long", alias = "LONG")]
    Long,
    #[serde(alias = "Short", alias = "SHORT")]
    Short,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Midpoint rule applied when rounding leverage and quantity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Banker's rounding: 1.25 -> 1.2, 1.35 -> 1.4
    #[default]
    HalfEven,
    /// 1.25 -> 1.3
    HalfUp,
}

impl RoundingPolicy {
    /// Round to `dp` decimal places under this policy
    pub fn round(&self, value: Decimal, dp: u32) -> Decimal {
        let strategy = match self {
            RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingPolicy::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        };
        value.round_dp_with_strategy(dp, strategy)
    }
}
