//! Covered call calculator.

use super::input::CoveredCallInput;
use super::terms::{PositionTerms, require_notional, require_positive, require_total};
use super::{Profit, StrategyCalculator, StrategyKind};
use crate::error::Result;
use crate::greeks::{Greeks, approximate_greeks};
use crate::utils::{percent_of, round_to};
use optionstratlib::OptionStyle;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Long stock plus a short call written against it.
///
/// Upside is capped at the strike; downside runs all the way to a stock
/// price of zero, cushioned only by the premium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveredCall {
    terms: PositionTerms,
    cost_basis: Decimal,
}

impl CoveredCall {
    /// Validates `input` and builds the calculator.
    ///
    /// # Arguments
    ///
    /// * `input` - Position as entered: contracts, call strike and premium,
    ///   cost basis of the shares, dates and optional fee and current price
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the first invalid field, including
    /// a cost basis whose share outlay does not fit in a `Decimal`.
    pub fn new(input: &CoveredCallInput) -> Result<Self> {
        let terms = PositionTerms::validate(input.raw_terms())?;
        let cost_basis = Self::check_cost_basis(&terms, input.cost_basis).inspect_err(|err| {
            warn!(
                strategy = %StrategyKind::CoveredCall,
                symbol = terms.symbol(),
                %err,
                "rejected position input"
            );
        })?;
        debug!(
            symbol = terms.symbol(),
            quantity = terms.quantity(),
            strike = %terms.strike(),
            cost_basis = %cost_basis,
            "created covered call"
        );
        Ok(Self { terms, cost_basis })
    }

    fn check_cost_basis(terms: &PositionTerms, cost_basis: Decimal) -> Result<Decimal> {
        let cost_basis = require_positive("cost_basis", cost_basis)?;
        let outlay = require_notional("cost_basis", cost_basis, terms.shares())?;
        require_total(
            "cost_basis",
            &[outlay, terms.total_premium(), terms.fee()],
        )?;
        Ok(cost_basis)
    }

    /// Cost basis per share of the stock.
    #[must_use]
    pub const fn cost_basis(&self) -> Decimal {
        self.cost_basis
    }

    /// Amount paid for the shares: `cost_basis * 100 * quantity`.
    #[must_use]
    pub fn share_outlay(&self) -> Decimal {
        self.cost_basis * self.terms.shares()
    }
}

impl StrategyCalculator for CoveredCall {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CoveredCall
    }

    fn terms(&self) -> &PositionTerms {
        &self.terms
    }

    fn option_style(&self) -> OptionStyle {
        OptionStyle::Call
    }

    fn max_profit(&self) -> Profit {
        let appreciation = (self.terms.strike() - self.cost_basis).max(Decimal::ZERO);
        let total = appreciation * self.terms.shares() + self.terms.total_premium();
        Profit::Limited(round_to(total - self.terms.fee(), 2))
    }

    fn max_loss(&self) -> Decimal {
        round_to(
            self.share_outlay() - self.terms.total_premium() + self.terms.fee(),
            2,
        )
    }

    fn breakeven(&self) -> Decimal {
        round_to(self.cost_basis - self.terms.premium(), 2)
    }

    fn capital_at_risk(&self) -> Decimal {
        round_to(self.share_outlay(), 2)
    }

    fn profit_at_expiration(&self, price: Decimal) -> Decimal {
        let settled = price.max(Decimal::ZERO).min(self.terms.strike());
        (settled - self.cost_basis) * self.terms.shares() + self.terms.total_premium()
            - self.terms.fee()
    }

    fn assignment_depth_pct(&self, price: Decimal) -> Option<Decimal> {
        Some(percent_of(price - self.terms.strike(), self.terms.strike()))
    }

    fn greeks(&self) -> Option<Greeks> {
        let price = self.terms.current_price()?;
        let shares = self.terms.shares();
        let short_call = -approximate_greeks(
            OptionStyle::Call,
            price,
            self.terms.strike(),
            self.days_to_expiration(),
        )
        .scale(shares);
        let stock = Greeks::new(shares, Decimal::ZERO, Decimal::ZERO);
        Some((stock + short_call).rounded())
    }
}
