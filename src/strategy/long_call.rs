//! Long call calculator.

use super::input::LongCallInput;
use super::terms::PositionTerms;
use super::{Profit, StrategyCalculator, StrategyKind};
use crate::error::Result;
use crate::greeks::{Greeks, approximate_greeks};
use crate::utils::round_to;
use optionstratlib::OptionStyle;
use rust_decimal::Decimal;
use tracing::debug;

/// A call option bought outright.
///
/// The most you can lose is the debit paid; profit has no upper bound, so
/// return on capital and annualized return are not defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongCall {
    terms: PositionTerms,
}

impl LongCall {
    /// Validates `input` and builds the calculator.
    ///
    /// # Arguments
    ///
    /// * `input` - Position as entered: contracts, call strike and premium
    ///   paid, dates and optional fee and current price
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the first invalid field.
    pub fn new(input: &LongCallInput) -> Result<Self> {
        let terms = PositionTerms::validate(input.raw_terms())?;
        debug!(
            symbol = terms.symbol(),
            quantity = terms.quantity(),
            strike = %terms.strike(),
            "created long call"
        );
        Ok(Self { terms })
    }

    /// Premium paid for the position: `premium * 100 * quantity`.
    #[must_use]
    pub fn debit(&self) -> Decimal {
        self.terms.total_premium()
    }
}

impl StrategyCalculator for LongCall {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LongCall
    }

    fn terms(&self) -> &PositionTerms {
        &self.terms
    }

    fn option_style(&self) -> OptionStyle {
        OptionStyle::Call
    }

    fn max_profit(&self) -> Profit {
        Profit::Unlimited
    }

    fn max_loss(&self) -> Decimal {
        round_to(self.debit() + self.terms.fee(), 2)
    }

    fn breakeven(&self) -> Decimal {
        round_to(self.terms.strike() + self.terms.premium(), 2)
    }

    fn capital_at_risk(&self) -> Decimal {
        round_to(self.debit(), 2)
    }

    fn profit_at_expiration(&self, price: Decimal) -> Decimal {
        let intrinsic = (price.max(Decimal::ZERO) - self.terms.strike()).max(Decimal::ZERO);
        intrinsic
            .saturating_mul(self.terms.shares())
            .saturating_sub(self.debit() + self.terms.fee())
    }

    fn assignment_depth_pct(&self, _price: Decimal) -> Option<Decimal> {
        None
    }

    fn greeks(&self) -> Option<Greeks> {
        let price = self.terms.current_price()?;
        let per_share = approximate_greeks(
            OptionStyle::Call,
            price,
            self.terms.strike(),
            self.days_to_expiration(),
        );
        Some(per_share.scale(self.terms.shares()).rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskCategory, RiskSeverity, RiskThresholds};
    use rust_decimal_macros::dec;

    fn input() -> LongCallInput {
        LongCallInput {
            symbol: "NVDA".into(),
            quantity: 1,
            strike: dec!(120),
            premium: dec!(3),
            expiration: "2026-06-19".into(),
            evaluation_date: Some("2026-06-01".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_economics() {
        let call = LongCall::new(&input()).unwrap();
        assert_eq!(call.max_loss(), dec!(300.00));
        assert!(call.max_profit().is_unlimited());
        assert_eq!(call.breakeven(), dec!(123));
    }

    #[test]
    fn test_returns_undefined() {
        let call = LongCall::new(&input()).unwrap();
        assert_eq!(call.return_on_capital(), None);
        assert_eq!(call.annualized_return(), None);
    }

    #[test]
    fn test_payoff() {
        let call = LongCall::new(&input()).unwrap();
        assert_eq!(call.profit_at_expiration(dec!(100)), dec!(-300));
        assert_eq!(call.profit_at_expiration(dec!(123)), Decimal::ZERO);
        assert_eq!(call.profit_at_expiration(dec!(140)), dec!(1700));
    }

    #[test]
    fn test_never_flags_price_or_assignment() {
        let call = LongCall::new(&LongCallInput {
            current_price: Some(dec!(120.5)),
            ..input()
        })
        .unwrap();
        let flags = call.analyze_risks(&RiskThresholds::default());
        assert!(flags.is_empty());
    }

    #[test]
    fn test_expired_is_critical_time_flag() {
        let call = LongCall::new(&LongCallInput {
            evaluation_date: Some("2026-06-22".into()),
            ..input()
        })
        .unwrap();
        assert_eq!(call.days_to_expiration(), -3);
        let flags = call.analyze_risks(&RiskThresholds::default());
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].category, RiskCategory::Time);
        assert_eq!(flags[0].severity, RiskSeverity::Critical);
    }

    #[test]
    fn test_long_call_greeks() {
        let call = LongCall::new(&LongCallInput {
            current_price: Some(dec!(120)),
            ..input()
        })
        .unwrap();
        let greeks = call.greeks().unwrap();
        assert!(greeks.delta > dec!(40) && greeks.delta < dec!(60));
        assert!(greeks.gamma > Decimal::ZERO);
        assert!(greeks.theta < Decimal::ZERO);
    }
}
