//! Exchange fee schedule

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::RiskError;
use crate::config::FeeConfig;

/// Taker and maker fee rates applied to order notional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Rate for aggressive (market) fills
    pub taker_rate: Decimal,
    /// Rate for passive (limit) fills
    pub maker_rate: Decimal,
}

impl FeeSchedule {
    pub fn new(taker_rate: Decimal, maker_rate: Decimal) -> Self {
        Self {
            taker_rate,
            maker_rate,
        }
    }

    pub fn from_config(config: &FeeConfig) -> Self {
        Self::new(config.taker_rate, config.maker_rate)
    }

    pub fn taker_fee(&self, notional: Decimal) -> Result<Decimal, RiskError> {
        notional
            .checked_mul(self.taker_rate)
            .ok_or_else(|| RiskError::out_of_range("Taker fee"))
    }

    pub fn maker_fee(&self, notional: Decimal) -> Result<Decimal, RiskError> {
        notional
            .checked_mul(self.maker_rate)
            .ok_or_else(|| RiskError::out_of_range("Maker fee"))
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            taker_rate: dec!(0.00055),
            maker_rate: dec!(0.0002),
        }
    }
}
