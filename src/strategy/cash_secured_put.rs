//! Cash-secured put calculator.

use super::input::CashSecuredPutInput;
use super::terms::PositionTerms;
use super::{Profit, StrategyCalculator, StrategyKind};
use crate::error::Result;
use crate::greeks::{Greeks, approximate_greeks};
use crate::utils::{percent_of, round_to};
use optionstratlib::OptionStyle;
use rust_decimal::Decimal;
use tracing::debug;

/// A short put fully collateralized by cash.
///
/// Profit is capped at the premium received; the worst case is assignment
/// with the underlying at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashSecuredPut {
    terms: PositionTerms,
}

impl CashSecuredPut {
    /// Validates `input` and builds the calculator.
    ///
    /// # Arguments
    ///
    /// * `input` - Position as entered: contracts, put strike and premium,
    ///   dates and optional fee and current price
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the first invalid field.
    pub fn new(input: &CashSecuredPutInput) -> Result<Self> {
        let terms = PositionTerms::validate(input.raw_terms())?;
        debug!(
            symbol = terms.symbol(),
            quantity = terms.quantity(),
            strike = %terms.strike(),
            "created cash-secured put"
        );
        Ok(Self { terms })
    }

    /// Cash set aside to cover assignment: `strike * 100 * quantity`.
    #[must_use]
    pub fn collateral(&self) -> Decimal {
        self.terms.strike() * self.terms.shares()
    }
}

impl StrategyCalculator for CashSecuredPut {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CashSecuredPut
    }

    fn terms(&self) -> &PositionTerms {
        &self.terms
    }

    fn option_style(&self) -> OptionStyle {
        OptionStyle::Put
    }

    fn max_profit(&self) -> Profit {
        Profit::Limited(round_to(self.terms.total_premium() - self.terms.fee(), 2))
    }

    fn max_loss(&self) -> Decimal {
        let per_share = self.terms.strike() - self.terms.premium();
        round_to(per_share * self.terms.shares() + self.terms.fee(), 2)
    }

    fn breakeven(&self) -> Decimal {
        round_to(self.terms.strike() - self.terms.premium(), 2)
    }

    fn capital_at_risk(&self) -> Decimal {
        round_to(self.collateral(), 2)
    }

    fn profit_at_expiration(&self, price: Decimal) -> Decimal {
        let intrinsic = (self.terms.strike() - price.max(Decimal::ZERO)).max(Decimal::ZERO);
        self.terms.total_premium() - intrinsic * self.terms.shares() - self.terms.fee()
    }

    fn assignment_depth_pct(&self, price: Decimal) -> Option<Decimal> {
        Some(percent_of(self.terms.strike() - price, self.terms.strike()))
    }

    fn greeks(&self) -> Option<Greeks> {
        let price = self.terms.current_price()?;
        let per_share = approximate_greeks(
            OptionStyle::Put,
            price,
            self.terms.strike(),
            self.days_to_expiration(),
        );
        Some(per_share.scale(-self.terms.shares()).rounded())
    }
}
