//! Approximate Greeks for display.
//!
//! These are simplified closed-form estimators driven by moneyness
//! (`ln(spot / strike)`), time to expiration and a fixed implied volatility of
//! [`DEFAULT_VOLATILITY`]. There are no interest rates, dividends or option
//! prices involved, so the values are only good for relative risk coloring in
//! charts. Do not hedge with them.
//!
//! | Greek | Estimator |
//! |-------|-----------|
//! | delta (call) | `N(d)` |
//! | delta (put) | `N(d) - 1` |
//! | gamma | `n(d) / (S σ √t)` |
//! | theta (per day) | `-(S n(d) σ) / (2 √t) / 365` |
//!
//! with `d = ln(S/K) / (σ√t) + σ√t / 2`, clamped to `[-6, 6]`, and
//! `t = max(dte, 1) / 365`.

use crate::utils::{DAYS_PER_YEAR, clamp, round_to};
use optionstratlib::OptionStyle;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Implied volatility assumed by every estimator.
pub const DEFAULT_VOLATILITY: Decimal = dec!(0.30);

/// Decimal places kept on reported Greeks.
const GREEK_DECIMALS: u32 = 4;

const D_BOUND: Decimal = dec!(6);

/// Delta, gamma and theta for an option or a whole position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeks {
    /// Change in value per $1 move of the underlying.
    #[serde(with = "rust_decimal::serde::float")]
    pub delta: Decimal,
    /// Change in delta per $1 move of the underlying.
    #[serde(with = "rust_decimal::serde::float")]
    pub gamma: Decimal,
    /// Change in value per calendar day.
    #[serde(with = "rust_decimal::serde::float")]
    pub theta: Decimal,
}

impl Greeks {
    /// Creates a new set of Greeks.
    #[must_use]
    pub const fn new(delta: Decimal, gamma: Decimal, theta: Decimal) -> Self {
        Self {
            delta,
            gamma,
            theta,
        }
    }

    /// All-zero Greeks.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    /// Scales every Greek by `factor` (negative for short exposure).
    ///
    /// Saturates at the `Decimal` bounds.
    #[must_use]
    pub fn scale(&self, factor: Decimal) -> Self {
        Self {
            delta: self.delta.saturating_mul(factor),
            gamma: self.gamma.saturating_mul(factor),
            theta: self.theta.saturating_mul(factor),
        }
    }

    /// Rounds every Greek to four decimals.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            delta: round_to(self.delta, GREEK_DECIMALS),
            gamma: round_to(self.gamma, GREEK_DECIMALS),
            theta: round_to(self.theta, GREEK_DECIMALS),
        }
    }
}

/// Sums two sets of Greeks, saturating at the `Decimal` bounds.
impl std::ops::Add for Greeks {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            delta: self.delta.saturating_add(other.delta),
            gamma: self.gamma.saturating_add(other.gamma),
            theta: self.theta.saturating_add(other.theta),
        }
    }
}

/// Flips long exposure to short and back.
impl std::ops::Neg for Greeks {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            delta: -self.delta,
            gamma: -self.gamma,
            theta: -self.theta,
        }
    }
}

/// Intermediate terms shared by the estimators.
struct Terms {
    d: Decimal,
    sqrt_t: Decimal,
    vol_sqrt_t: Decimal,
}

fn terms(spot: Decimal, strike: Decimal, days_to_expiration: i64) -> Option<Terms> {
    if spot <= Decimal::ZERO || strike <= Decimal::ZERO {
        return None;
    }
    let t = Decimal::from(days_to_expiration.max(1)) / Decimal::from(DAYS_PER_YEAR);
    let sqrt_t = t.sqrt()?;
    let vol_sqrt_t = DEFAULT_VOLATILITY * sqrt_t;
    let log_moneyness = spot.checked_div(strike)?.checked_ln()?;
    let d = clamp(
        log_moneyness / vol_sqrt_t + vol_sqrt_t / Decimal::TWO,
        -D_BOUND,
        D_BOUND,
    );
    Some(Terms {
        d,
        sqrt_t,
        vol_sqrt_t,
    })
}

/// Approximate per-share delta of a long option.
///
/// Falls back to zero when spot or strike is not positive.
#[must_use]
pub fn approximate_delta(
    style: OptionStyle,
    spot: Decimal,
    strike: Decimal,
    days_to_expiration: i64,
) -> Decimal {
    let Some(terms) = terms(spot, strike, days_to_expiration) else {
        return Decimal::ZERO;
    };
    let call_delta = terms.d.norm_cdf();
    match style {
        OptionStyle::Call => call_delta,
        OptionStyle::Put => call_delta - Decimal::ONE,
    }
}

/// Approximate per-share gamma of a long option (same for calls and puts).
///
/// Saturates at `Decimal::MAX` when the spot is too small to divide by.
#[must_use]
pub fn approximate_gamma(spot: Decimal, strike: Decimal, days_to_expiration: i64) -> Decimal {
    terms(spot, strike, days_to_expiration).map_or(Decimal::ZERO, |terms| {
        spot.checked_mul(terms.vol_sqrt_t)
            .and_then(|scale| terms.d.norm_pdf().checked_div(scale))
            .unwrap_or(Decimal::MAX)
    })
}

/// Approximate per-share, per-day theta of a long option (non-positive).
///
/// Saturates at `Decimal::MIN` for spots near the top of the `Decimal` range.
#[must_use]
pub fn approximate_theta(spot: Decimal, strike: Decimal, days_to_expiration: i64) -> Decimal {
    terms(spot, strike, days_to_expiration).map_or(Decimal::ZERO, |terms| {
        (spot * terms.d.norm_pdf() * DEFAULT_VOLATILITY)
            .checked_div(Decimal::TWO * terms.sqrt_t)
            .map_or(Decimal::MIN, |annual| -annual / Decimal::from(DAYS_PER_YEAR))
    })
}

/// Per-share Greeks of one long option, unrounded.
#[must_use]
pub fn approximate_greeks(
    style: OptionStyle,
    spot: Decimal,
    strike: Decimal,
    days_to_expiration: i64,
) -> Greeks {
    Greeks::new(
        approximate_delta(style, spot, strike, days_to_expiration),
        approximate_gamma(spot, strike, days_to_expiration),
        approximate_theta(spot, strike, days_to_expiration),
    )
}
