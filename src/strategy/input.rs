//! Raw position inputs, as entered in the journal's forms.
//!
//! The upstream UI coerces types (strings to numbers); business rules are
//! enforced when a calculator is built from one of these.

use super::StrategyKind;
use super::terms::RawTerms;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for a covered call: long shares plus a short call against them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredCallInput {
    /// Underlying symbol.
    pub symbol: String,
    /// Contracts written (each covers 100 shares).
    pub quantity: i64,
    /// Call strike.
    #[serde(with = "rust_decimal::serde::float")]
    pub strike: Decimal,
    /// Premium received per share.
    #[serde(with = "rust_decimal::serde::float")]
    pub premium: Decimal,
    /// Cost basis per share of the stock.
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_basis: Decimal,
    /// Expiration date, `YYYY-MM-DD`.
    pub expiration: String,
    /// Evaluation date, `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub evaluation_date: Option<String>,
    /// Total transaction fee.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fee: Option<Decimal>,
    /// Current price of the underlying.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_price: Option<Decimal>,
}

/// Input for a cash-secured put: a short put backed by cash collateral.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSecuredPutInput {
    /// Underlying symbol.
    pub symbol: String,
    /// Contracts written.
    pub quantity: i64,
    /// Put strike.
    #[serde(with = "rust_decimal::serde::float")]
    pub strike: Decimal,
    /// Premium received per share.
    #[serde(with = "rust_decimal::serde::float")]
    pub premium: Decimal,
    /// Expiration date, `YYYY-MM-DD`.
    pub expiration: String,
    /// Evaluation date, `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub evaluation_date: Option<String>,
    /// Total transaction fee.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fee: Option<Decimal>,
    /// Current price of the underlying.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_price: Option<Decimal>,
}

/// Input for a long call: a call bought outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongCallInput {
    /// Underlying symbol.
    pub symbol: String,
    /// Contracts bought.
    pub quantity: i64,
    /// Call strike.
    #[serde(with = "rust_decimal::serde::float")]
    pub strike: Decimal,
    /// Premium paid per share.
    #[serde(with = "rust_decimal::serde::float")]
    pub premium: Decimal,
    /// Expiration date, `YYYY-MM-DD`.
    pub expiration: String,
    /// Evaluation date, `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub evaluation_date: Option<String>,
    /// Total transaction fee.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fee: Option<Decimal>,
    /// Current price of the underlying.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_price: Option<Decimal>,
}

/// Input for any supported strategy, tagged by `"strategy"` in JSON.
///
/// ```json
/// { "strategy": "cashSecuredPut", "symbol": "AAPL", "quantity": 2,
///   "strike": 50, "premium": 1.5, "expiration": "2026-01-16" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum StrategyInput {
    /// Covered call.
    CoveredCall(CoveredCallInput),
    /// Cash-secured put.
    CashSecuredPut(CashSecuredPutInput),
    /// Long call.
    LongCall(LongCallInput),
}

impl StrategyInput {
    /// Strategy this input describes.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::CoveredCall(_) => StrategyKind::CoveredCall,
            Self::CashSecuredPut(_) => StrategyKind::CashSecuredPut,
            Self::LongCall(_) => StrategyKind::LongCall,
        }
    }
}

impl From<CoveredCallInput> for StrategyInput {
    fn from(input: CoveredCallInput) -> Self {
        Self::CoveredCall(input)
    }
}

impl From<CashSecuredPutInput> for StrategyInput {
    fn from(input: CashSecuredPutInput) -> Self {
        Self::CashSecuredPut(input)
    }
}

impl From<LongCallInput> for StrategyInput {
    fn from(input: LongCallInput) -> Self {
        Self::LongCall(input)
    }
}

impl CoveredCallInput {
    pub(crate) fn raw_terms(&self) -> RawTerms<'_> {
        RawTerms {
            kind: StrategyKind::CoveredCall,
            symbol: &self.symbol,
            quantity: self.quantity,
            strike: self.strike,
            premium: self.premium,
            expiration: &self.expiration,
            evaluation_date: self.evaluation_date.as_deref(),
            fee: self.fee,
            current_price: self.current_price,
        }
    }
}

impl CashSecuredPutInput {
    pub(crate) fn raw_terms(&self) -> RawTerms<'_> {
        RawTerms {
            kind: StrategyKind::CashSecuredPut,
            symbol: &self.symbol,
            quantity: self.quantity,
            strike: self.strike,
            premium: self.premium,
            expiration: &self.expiration,
            evaluation_date: self.evaluation_date.as_deref(),
            fee: self.fee,
            current_price: self.current_price,
        }
    }
}

impl LongCallInput {
    pub(crate) fn raw_terms(&self) -> RawTerms<'_> {
        RawTerms {
            kind: StrategyKind::LongCall,
            symbol: &self.symbol,
            quantity: self.quantity,
            strike: self.strike,
            premium: self.premium,
            expiration: &self.expiration,
            evaluation_date: self.evaluation_date.as_deref(),
            fee: self.fee,
            current_price: self.current_price,
        }
    }
}
