//! Risk-based position sizing
//!
//! Sizes a position so that hitting the stop-loss loses exactly the chosen
//! percentage of the account, then derives the leverage that size needs,
//! where the isolated-margin liquidation price lands, and what the fills cost.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::fees::FeeSchedule;
use super::leverage::LeverageTier;
use super::liquidation::{self, LiquidationAssessment};
use super::types::{Direction, RiskError, RoundingPolicy};
use crate::config::{FeeConfig, RiskConfig};

/// Inputs for one sizing calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Account balance in quote currency
    pub account_size: Decimal,
    /// Percent of the account to lose at the stop (2 = 2%)
    pub risk_pct: Decimal,
    pub entry: Decimal,
    pub stop_loss: Decimal,
    /// Liquidation is only modelled when a direction is given
    pub direction: Option<Direction>,
    /// Overrides the engine's maintenance margin rate
    pub maintenance_margin_rate: Option<Decimal>,
}

impl SizingRequest {
    pub fn new(account_size: Decimal, risk_pct: Decimal, entry: Decimal, stop_loss: Decimal) -> Self {
        Self {
            account_size,
            risk_pct,
            entry,
            stop_loss,
            direction: None,
            maintenance_margin_rate: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_maintenance_margin_rate(mut self, mmr: Decimal) -> Self {
        self.maintenance_margin_rate = Some(mmr);
        self
    }
}

/// Output of a sizing calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingResult {
    pub risk_amount: Decimal,
    pub stop_distance: Decimal,
    pub quantity: Decimal,
    pub order_value: Decimal,
    pub required_leverage: Decimal,
    pub leverage_tier: LeverageTier,
    pub leverage_note: String,
    pub liquidation: Option<LiquidationAssessment>,
    pub taker_fee: Decimal,
    pub maker_fee: Decimal,
}

/// Pure position sizing calculator
#[derive(Debug, Clone)]
pub struct RiskEngine {
    /// Default maintenance margin rate
    pub maintenance_margin_rate: Decimal,
    /// Round quantity to whole units
    pub round_quantity: bool,
    pub rounding: RoundingPolicy,
    pub fees: FeeSchedule,
}

impl RiskEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from risk and fee configuration
    pub fn from_config(risk: &RiskConfig, fees: &FeeConfig) -> Self {
        Self {
            maintenance_margin_rate: risk.maintenance_margin_rate,
            round_quantity: risk.round_quantity,
            rounding: risk.rounding,
            fees: FeeSchedule::from_config(fees),
        }
    }

    pub fn with_round_quantity(mut self, round_quantity: bool) -> Self {
        self.round_quantity = round_quantity;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_fees(mut self, fees: FeeSchedule) -> Self {
        self.fees = fees;
        self
    }

    pub fn with_maintenance_margin_rate(mut self, mmr: Decimal) -> Self {
        self.maintenance_margin_rate = mmr;
        self
    }

    /// Size a position
    ///
    /// Fails with [`RiskError::InvalidParameters`] when entry equals the
    /// stop-loss, or when an intermediate value leaves the decimal range.
    /// Signs are not otherwise checked; a zero account size or zero entry is
    /// rejected only because it would divide by zero.
    pub fn compute_sizing(&self, request: &SizingRequest) -> Result<SizingResult, RiskError> {
        let risk_amount = request
            .account_size
            .checked_mul(request.risk_pct / dec!(100))
            .ok_or_else(|| RiskError::out_of_range("Risk amount"))?;

        let stop_distance = request
            .entry
            .checked_sub(request.stop_loss)
            .ok_or_else(|| RiskError::out_of_range("Stop distance"))?
            .abs();
        if stop_distance.is_zero() {
            return Err(RiskError::InvalidParameters(
                "Stop loss cannot be equal to entry price.".to_string(),
            ));
        }
        if request.account_size.is_zero() {
            return Err(RiskError::InvalidParameters(
                "Account size must be non-zero.".to_string(),
            ));
        }

        let raw_quantity = risk_amount
            .checked_div(stop_distance)
            .ok_or_else(|| RiskError::out_of_range("Quantity"))?;
        let quantity = if self.round_quantity {
            self.rounding.round(raw_quantity, 0)
        } else {
            raw_quantity
        };
        let order_value = quantity
            .checked_mul(request.entry)
            .ok_or_else(|| RiskError::out_of_range("Order value"))?;

        let required_leverage = self
            .rounding
            .round(
                order_value
                    .checked_div(request.account_size)
                    .ok_or_else(|| RiskError::out_of_range("Leverage"))?,
                1,
            )
            .max(Decimal::ONE);
        let leverage_tier = LeverageTier::classify(required_leverage);
        let leverage_note = leverage_tier.note(order_value, required_leverage);

        let liquidation = match request.direction {
            Some(direction) => Some(liquidation::assess(
                direction,
                request.entry,
                request.stop_loss,
                required_leverage,
                request
                    .maintenance_margin_rate
                    .unwrap_or(self.maintenance_margin_rate),
            )?),
            None => None,
        };

        tracing::debug!(
            risk_amount = %risk_amount,
            quantity = %quantity,
            order_value = %order_value,
            leverage = %required_leverage,
            "Computed position sizing"
        );

        Ok(SizingResult {
            risk_amount,
            stop_distance,
            quantity,
            order_value,
            required_leverage,
            leverage_tier,
            leverage_note,
            liquidation,
            taker_fee: self.fees.taker_fee(order_value)?,
            maker_fee: self.fees.maker_fee(order_value)?,
        })
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            maintenance_margin_rate: dec!(0.005),
            round_quantity: false,
            rounding: RoundingPolicy::HalfEven,
            fees: FeeSchedule::default(),
        }
    }
}
