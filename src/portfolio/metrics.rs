//! Portfolio-level profit and loss aggregation.

use crate::strategy::{Profit, StrategyCalculator};
use crate::utils::{format_currency, percent_of, round_to};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Totals across a list of positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    /// Number of positions aggregated.
    pub position_count: usize,
    /// Sum of bounded max profits. Unlimited legs are left out.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_max_profit: Decimal,
    /// Sum of max losses.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_max_loss: Decimal,
    /// Mean days to expiration, one decimal.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_dte: Decimal,
    /// `total_max_profit / total_max_loss * 100`, or zero with no loss.
    #[serde(with = "rust_decimal::serde::float")]
    pub portfolio_roo: Decimal,
    /// Positions whose max profit is unbounded.
    pub unlimited_profit_positions: usize,
}

impl PortfolioMetrics {
    /// Returns true if any position has unbounded upside.
    #[must_use]
    pub const fn has_unlimited_profit(&self) -> bool {
        self.unlimited_profit_positions > 0
    }
}

impl std::fmt::Display for PortfolioMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} positions, max profit {}, max loss {}, avg DTE {}, ROO {}%",
            self.position_count,
            format_currency(self.total_max_profit),
            format_currency(self.total_max_loss),
            self.average_dte,
            self.portfolio_roo
        )?;
        if self.has_unlimited_profit() {
            write!(f, " (+{} unlimited)", self.unlimited_profit_positions)?;
        }
        Ok(())
    }
}

/// Sums max profit and max loss across positions and averages their DTE.
///
/// An empty slice yields all zeros. Totals saturate at `Decimal::MAX` instead
/// of overflowing, so a portfolio of individually valid but very large
/// positions reports the ceiling rather than panicking.
///
/// # Arguments
///
/// * `positions` - Positions of any strategy type
#[must_use]
pub fn calculate_portfolio_metrics<P: StrategyCalculator>(positions: &[P]) -> PortfolioMetrics {
    if positions.is_empty() {
        return PortfolioMetrics::default();
    }

    let mut total_max_profit = Decimal::ZERO;
    let mut total_max_loss = Decimal::ZERO;
    let mut total_dte = Decimal::ZERO;
    let mut unlimited_profit_positions = 0;

    for position in positions {
        match position.max_profit() {
            Profit::Limited(profit) => {
                total_max_profit = total_max_profit.saturating_add(profit);
            }
            Profit::Unlimited => unlimited_profit_positions += 1,
        }
        total_max_loss = total_max_loss.saturating_add(position.max_loss());
        total_dte = total_dte.saturating_add(Decimal::from(position.days_to_expiration()));
    }

    let metrics = PortfolioMetrics {
        position_count: positions.len(),
        total_max_profit: round_to(total_max_profit, 2),
        total_max_loss: round_to(total_max_loss, 2),
        average_dte: round_to(total_dte / Decimal::from(positions.len()), 1),
        portfolio_roo: round_to(percent_of(total_max_profit, total_max_loss), 2),
        unlimited_profit_positions,
    };
    debug!(%metrics, "calculated portfolio metrics");
    metrics
}
