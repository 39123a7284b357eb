//! Journal record types

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::risk::{Direction, FeeSchedule, RiskError, SizingRequest, SizingResult, WarningLevel};

/// Journal errors
#[derive(Debug, Error)]
pub enum JournalError {
    /// Sizing rejected the trade parameters
    #[error(transparent)]
    Risk(#[from] RiskError),
    /// Reading or writing the journal file failed
    #[error("Journal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Trades could not be encoded
    #[error("Journal encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The journal holds more trades than a trade id can number
    #[error("Trade count exceeds the id range")]
    IdOverflow,
}

/// Trade lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
}

impl std::fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeStatus::Open => f.write_str("open"),
            TradeStatus::Closed => f.write_str("closed"),
        }
    }
}

/// Parameters for opening a trade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTrade {
    /// Instrument, e.g. BTCUSDT
    pub pair: String,
    pub direction: Direction,
    pub account_size: Decimal,
    pub risk_pct: Decimal,
    pub entry: Decimal,
    pub stop_loss: Decimal,
    /// Overrides the engine's maintenance margin rate
    pub maintenance_margin_rate: Option<Decimal>,
}

impl OpenTrade {
    pub fn sizing_request(&self) -> SizingRequest {
        SizingRequest {
            account_size: self.account_size,
            risk_pct: self.risk_pct,
            entry: self.entry,
            stop_loss: self.stop_loss,
            direction: Some(self.direction),
            maintenance_margin_rate: self.maintenance_margin_rate,
        }
    }
}

/// A journaled trade
///
/// Stored as one flat JSON object. Liquidation fields are always present and
/// null when no liquidation was modelled; close fields are null while open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u32,
    #[serde(with = "journal_date")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub pair: String,
    pub account_size: Decimal,
    pub risk_pct: Decimal,
    pub entry: Decimal,
    pub stop_loss: Decimal,
    pub direction: Direction,

    pub risk_amount: Decimal,
    #[serde(alias = "position_size")]
    pub quantity: Decimal,
    pub order_value: Decimal,
    pub required_leverage: Decimal,
    pub leverage_note: String,
    #[serde(default)]
    pub liquidation_price: Option<Decimal>,
    #[serde(default)]
    pub liquidation_warning: Option<String>,
    #[serde(default)]
    pub warning_level: Option<WarningLevel>,
    pub taker_fee: Decimal,
    pub maker_fee: Decimal,

    pub status: TradeStatus,
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    #[serde(default)]
    pub gross_pnl: Option<Decimal>,
    #[serde(default)]
    pub fees_paid: Option<Decimal>,
    #[serde(default)]
    pub net_pnl: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Trade {
    /// Build an open trade from its parameters and sizing
    pub fn open(id: u32, date: NaiveDateTime, order: &OpenTrade, sizing: &SizingResult) -> Self {
        let liquidation = sizing.liquidation.as_ref();
        Self {
            id,
            date,
            pair: order.pair.clone(),
            account_size: order.account_size,
            risk_pct: order.risk_pct,
            entry: order.entry,
            stop_loss: order.stop_loss,
            direction: order.direction,
            risk_amount: sizing.risk_amount,
            quantity: sizing.quantity,
            order_value: sizing.order_value,
            required_leverage: sizing.required_leverage,
            leverage_note: sizing.leverage_note.clone(),
            liquidation_price: liquidation.map(|l| l.liquidation_price),
            liquidation_warning: liquidation.map(|l| l.warning.clone()),
            warning_level: liquidation.map(|l| l.warning_level),
            taker_fee: sizing.taker_fee,
            maker_fee: sizing.maker_fee,
            status: TradeStatus::Open,
            exit_price: None,
            gross_pnl: None,
            fees_paid: None,
            net_pnl: None,
            notes: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    /// Price move in the trade's favour, times quantity
    pub fn gross_pnl_at(&self, exit_price: Decimal) -> Result<Decimal, RiskError> {
        let (from, to) = match self.direction {
            Direction::Long => (self.entry, exit_price),
            Direction::Short => (exit_price, self.entry),
        };
        to.checked_sub(from)
            .and_then(|diff| diff.checked_mul(self.quantity))
            .ok_or_else(|| RiskError::out_of_range("Gross P&L"))
    }

    /// Entry and exit fees, both charged at the taker rate
    pub fn round_trip_fees(
        &self,
        exit_price: Decimal,
        fees: &FeeSchedule,
    ) -> Result<Decimal, RiskError> {
        let exit_value = self
            .quantity
            .checked_mul(exit_price)
            .ok_or_else(|| RiskError::out_of_range("Exit value"))?;
        let entry_fee = fees.taker_fee(self.order_value)?;
        let exit_fee = fees.taker_fee(exit_value)?;
        entry_fee
            .checked_add(exit_fee)
            .ok_or_else(|| RiskError::out_of_range("Fees"))
    }

    /// Settle the trade at `exit_price`
    ///
    /// Callers must only settle open trades; closed trades are final. On
    /// error the trade is left unchanged.
    pub fn close(
        &mut self,
        exit_price: Decimal,
        notes: Option<String>,
        fees: &FeeSchedule,
    ) -> Result<(), RiskError> {
        let gross_pnl = self.gross_pnl_at(exit_price)?;
        let fees_paid = self.round_trip_fees(exit_price, fees)?;
        let net_pnl = gross_pnl
            .checked_sub(fees_paid)
            .ok_or_else(|| RiskError::out_of_range("Net P&L"))?;

        self.status = TradeStatus::Closed;
        self.exit_price = Some(exit_price);
        self.gross_pnl = Some(gross_pnl);
        self.fees_paid = Some(fees_paid);
        self.net_pnl = Some(net_pnl);
        self.notes = notes;
        Ok(())
    }
}

/// Serde codec for the `YYYY-MM-DD HH:MM:SS` journal timestamp
mod journal_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
