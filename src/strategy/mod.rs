//! Strategy calculators.
//!
//! Each calculator is built once from validated inputs and never changes.
//! All of them share the [`StrategyCalculator`] capability set, which is the
//! only thing the portfolio functions rely on.
//!
//! | Strategy | max profit | max loss | breakeven |
//! |----------|------------|----------|-----------|
//! | [`CashSecuredPut`] | `premium * 100 * qty` | `(strike - premium) * 100 * qty` | `strike - premium` |
//! | [`CoveredCall`] | `max(0, strike - basis) * 100 * qty + premium * 100 * qty` | `basis * 100 * qty - premium * 100 * qty` | `basis - premium` |
//! | [`LongCall`] | [`Profit::Unlimited`] | `premium * 100 * qty` | `strike + premium` |
//!
//! A transaction fee, when given, is taken out of max profit and added to
//! max loss.
//!
//! ## Example
//!
//! ```rust
//! use options_risk_engine::strategy::{CashSecuredPutInput, StrategyCalculator, create_cash_secured_put};
//! use rust_decimal_macros::dec;
//!
//! let put = create_cash_secured_put(&CashSecuredPutInput {
//!     symbol: "AAPL".into(),
//!     quantity: 2,
//!     strike: dec!(50),
//!     premium: dec!(1.5),
//!     expiration: "2026-01-16".into(),
//!     evaluation_date: Some("2025-12-17".into()),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert_eq!(put.max_profit().limited(), Some(dec!(300)));
//! assert_eq!(put.max_loss(), dec!(9700));
//! assert_eq!(put.breakeven(), dec!(48.5));
//! ```

mod cash_secured_put;
mod covered_call;
mod factory;
mod input;
mod long_call;
mod terms;

pub use cash_secured_put::CashSecuredPut;
pub use covered_call::CoveredCall;
pub use factory::{
    create_cash_secured_put, create_covered_call, create_long_call, create_strategies,
    create_strategy, strategy_from_json,
};
pub use input::{CashSecuredPutInput, CoveredCallInput, LongCallInput, StrategyInput};
pub use long_call::LongCall;
pub use terms::PositionTerms;

use crate::greeks::Greeks;
use crate::risk::{
    RiskFlag, RiskThresholds, check_assignment_risk, check_price_risk, check_return_risk,
    check_size_risk, check_time_risk,
};
use crate::utils::{
    annualize_return, format_contract_symbol, format_currency, generate_price_range, percent_of,
    round_to,
};
use optionstratlib::OptionStyle;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which strategy a calculator implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    /// Long stock plus short call.
    CoveredCall,
    /// Short put backed by cash.
    CashSecuredPut,
    /// Long call.
    LongCall,
}

impl StrategyKind {
    /// Snake case name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CoveredCall => "covered_call",
            Self::CashSecuredPut => "cash_secured_put",
            Self::LongCall => "long_call",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum profit of a position, which may be unbounded.
///
/// Serializes as a number, or as the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profit {
    /// Bounded profit.
    Limited(Decimal),
    /// No upper bound (e.g. a long call).
    Unlimited,
}

impl Profit {
    /// The bounded amount, or `None` when unlimited.
    #[must_use]
    pub const fn limited(&self) -> Option<Decimal> {
        match self {
            Self::Limited(value) => Some(*value),
            Self::Unlimited => None,
        }
    }

    /// Returns true for [`Profit::Unlimited`].
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl fmt::Display for Profit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(value) => f.write_str(&format_currency(*value)),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

impl Serialize for Profit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Limited(value) => rust_decimal::serde::float::serialize(value, serializer),
            Self::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

/// One sample of a payoff chart: profit at expiration for a given price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPoint {
    /// Underlying price at expiration.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Position profit (negative for loss) at that price.
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
}

/// Snapshot of every derived metric of a position, rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMetrics {
    /// Strategy kind.
    pub strategy: StrategyKind,
    /// Underlying symbol.
    pub symbol: String,
    /// Display symbol of the option leg.
    pub contract_symbol: String,
    /// Number of contracts.
    pub quantity: u32,
    /// Maximum profit.
    pub max_profit: Profit,
    /// Maximum loss.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_loss: Decimal,
    /// Breakeven price at expiration.
    #[serde(with = "rust_decimal::serde::float")]
    pub breakeven: Decimal,
    /// Capital committed to the position.
    #[serde(with = "rust_decimal::serde::float")]
    pub capital_at_risk: Decimal,
    /// Return on capital at risk (percent); `None` when profit is unbounded.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub return_on_capital: Option<Decimal>,
    /// Annualized return (percent); `None` when profit is unbounded.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub annualized_return: Option<Decimal>,
    /// Days to expiration (negative once expired).
    pub days_to_expiration: i64,
    /// Approximate position Greeks, when a current price is known.
    pub greeks: Option<Greeks>,
}

/// Capability set shared by every strategy calculator.
///
/// Implementors provide the strategy-specific economics; risk analysis,
/// returns and payoff sampling are derived from them.
pub trait StrategyCalculator {
    /// Strategy kind.
    fn kind(&self) -> StrategyKind;

    /// Validated position terms.
    fn terms(&self) -> &PositionTerms;

    /// Style of the option leg.
    fn option_style(&self) -> OptionStyle;

    /// Maximum profit, rounded to cents.
    fn max_profit(&self) -> Profit;

    /// Maximum loss, rounded to cents.
    fn max_loss(&self) -> Decimal;

    /// Breakeven underlying price at expiration.
    fn breakeven(&self) -> Decimal;

    /// Capital committed to the position (collateral, share outlay or debit).
    fn capital_at_risk(&self) -> Decimal;

    /// Position profit at expiration if the underlying settles at `price`.
    fn profit_at_expiration(&self, price: Decimal) -> Decimal;

    /// How far a short option is in the money, as percent of strike.
    ///
    /// `None` for strategies without assignment exposure.
    fn assignment_depth_pct(&self, price: Decimal) -> Option<Decimal>;

    /// Approximate position Greeks, when a current price is known.
    fn greeks(&self) -> Option<Greeks>;

    /// Days from the evaluation date to expiration.
    fn days_to_expiration(&self) -> i64 {
        self.terms().days_to_expiration()
    }

    /// Return on capital at risk, as a percentage rounded to cents.
    fn return_on_capital(&self) -> Option<Decimal> {
        self.max_profit()
            .limited()
            .map(|profit| round_to(percent_of(profit, self.capital_at_risk()), 2))
    }

    /// Annualized return on capital at risk, as a percentage.
    fn annualized_return(&self) -> Option<Decimal> {
        self.max_profit().limited().map(|profit| {
            round_to(
                annualize_return(profit, self.capital_at_risk(), self.days_to_expiration()),
                2,
            )
        })
    }

    /// Display symbol of the option leg, e.g. `AAPL-20260116-50-P`.
    fn contract_symbol(&self) -> String {
        let terms = self.terms();
        format_contract_symbol(
            terms.symbol(),
            terms.expiration(),
            terms.strike(),
            self.option_style(),
        )
    }

    /// Samples the expiration payoff over `steps` prices from `min` to `max`.
    fn payoff_curve(&self, min: Decimal, max: Decimal, steps: usize) -> Vec<PayoffPoint> {
        generate_price_range(min, max, steps)
            .into_iter()
            .map(|price| PayoffPoint {
                price,
                profit: round_to(self.profit_at_expiration(price), 2),
            })
            .collect()
    }

    /// Evaluates every threshold check that applies to this position.
    ///
    /// Flags come out in a fixed order: return, time, price, assignment,
    /// size. Price and assignment checks run only for strategies with a short
    /// option and only when a current price is known.
    fn analyze_risks(&self, thresholds: &RiskThresholds) -> Vec<RiskFlag> {
        let dte = self.days_to_expiration();
        let mut flags = Vec::new();

        if let Some(roo) = self.return_on_capital() {
            flags.extend(check_return_risk(roo, thresholds));
        }
        flags.extend(check_time_risk(dte, thresholds));

        if let Some(price) = self.terms().current_price()
            && let Some(depth) = self.assignment_depth_pct(price)
        {
            flags.extend(check_price_risk(price, self.terms().strike(), thresholds));
            flags.extend(check_assignment_risk(depth, dte, thresholds));
        }

        flags.extend(check_size_risk(self.capital_at_risk(), thresholds));
        flags
    }

    /// Collects every metric into one snapshot.
    fn metrics(&self) -> PositionMetrics {
        let terms = self.terms();
        PositionMetrics {
            strategy: self.kind(),
            symbol: terms.symbol().to_string(),
            contract_symbol: self.contract_symbol(),
            quantity: terms.quantity(),
            max_profit: self.max_profit(),
            max_loss: self.max_loss(),
            breakeven: self.breakeven(),
            capital_at_risk: self.capital_at_risk(),
            return_on_capital: self.return_on_capital(),
            annualized_return: self.annualized_return(),
            days_to_expiration: self.days_to_expiration(),
            greeks: self.greeks(),
        }
    }
}

/// Any supported strategy, for heterogeneous portfolios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Covered call.
    CoveredCall(CoveredCall),
    /// Cash-secured put.
    CashSecuredPut(CashSecuredPut),
    /// Long call.
    LongCall(LongCall),
}

impl Strategy {
    fn inner(&self) -> &dyn StrategyCalculator {
        match self {
            Self::CoveredCall(position) => position,
            Self::CashSecuredPut(position) => position,
            Self::LongCall(position) => position,
        }
    }
}

impl StrategyCalculator for Strategy {
    fn kind(&self) -> StrategyKind {
        self.inner().kind()
    }

    fn terms(&self) -> &PositionTerms {
        self.inner().terms()
    }

    fn option_style(&self) -> OptionStyle {
        self.inner().option_style()
    }

    fn max_profit(&self) -> Profit {
        self.inner().max_profit()
    }

    fn max_loss(&self) -> Decimal {
        self.inner().max_loss()
    }

    fn breakeven(&self) -> Decimal {
        self.inner().breakeven()
    }

    fn capital_at_risk(&self) -> Decimal {
        self.inner().capital_at_risk()
    }

    fn profit_at_expiration(&self, price: Decimal) -> Decimal {
        self.inner().profit_at_expiration(price)
    }

    fn assignment_depth_pct(&self, price: Decimal) -> Option<Decimal> {
        self.inner().assignment_depth_pct(price)
    }

    fn greeks(&self) -> Option<Greeks> {
        self.inner().greeks()
    }
}

impl From<CoveredCall> for Strategy {
    fn from(position: CoveredCall) -> Self {
        Self::CoveredCall(position)
    }
}

impl From<CashSecuredPut> for Strategy {
    fn from(position: CashSecuredPut) -> Self {
        Self::CashSecuredPut(position)
    }
}

impl From<LongCall> for Strategy {
    fn from(position: LongCall) -> Self {
        Self::LongCall(position)
    }
}

impl<T: StrategyCalculator + ?Sized> StrategyCalculator for &T {
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    fn terms(&self) -> &PositionTerms {
        (**self).terms()
    }

    fn option_style(&self) -> OptionStyle {
        (**self).option_style()
    }

    fn max_profit(&self) -> Profit {
        (**self).max_profit()
    }

    fn max_loss(&self) -> Decimal {
        (**self).max_loss()
    }

    fn breakeven(&self) -> Decimal {
        (**self).breakeven()
    }

    fn capital_at_risk(&self) -> Decimal {
        (**self).capital_at_risk()
    }

    fn profit_at_expiration(&self, price: Decimal) -> Decimal {
        (**self).profit_at_expiration(price)
    }

    fn assignment_depth_pct(&self, price: Decimal) -> Option<Decimal> {
        (**self).assignment_depth_pct(price)
    }

    fn greeks(&self) -> Option<Greeks> {
        (**self).greeks()
    }
}
