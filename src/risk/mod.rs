//! Risk engine module
//!
//! Position sizing, leverage advisories, liquidation checks and fees.
//! Everything here is pure computation with no I/O.

mod fees;
mod leverage;
mod liquidation;
mod sizing;
mod types;

pub use fees::FeeSchedule;
pub use leverage::{LeverageTier, MODERATE_LEVERAGE_MAX};
pub use liquidation::{
    assess as assess_liquidation, liquidation_price, LiquidationAssessment, WarningLevel,
    DANGER_DISTANCE_PCT, RISKY_DISTANCE_PCT, WATCH_DISTANCE_PCT,
};
pub use sizing::{RiskEngine, SizingRequest, SizingResult};
pub use types::{Direction, RiskError, RoundingPolicy};
