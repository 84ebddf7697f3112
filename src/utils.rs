//! Utility functions shared by the strategy calculators and risk checks.
//!
//! All currency and percentage outputs in this crate go through [`round_to`],
//! which rounds half away from zero (`1.005 -> 1.01`, `-1.005 -> -1.01`).
//! Values are `Decimal`, so the result is identical on every platform.

use crate::error::ValidationError;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use optionstratlib::OptionStyle;
use rust_decimal::prelude::*;

/// Contract multiplier: shares per option contract.
pub const CONTRACT_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Days per year used for annualization and Greeks time scaling.
pub const DAYS_PER_YEAR: i64 = 365;

/// Rounds `value` to `decimals` places, half away from zero.
///
/// # Examples
///
/// ```rust
/// use options_risk_engine::utils::round_to;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to(dec!(48.505), 2), dec!(48.51));
/// assert_eq!(round_to(dec!(-0.125), 2), dec!(-0.13));
/// ```
#[must_use]
pub fn round_to(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Restricts `value` to the inclusive range `[min, max]`.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns the current local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of calendar days from `from` to `to` (negative when `to` is earlier).
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Calendar-day difference between two timestamps, using local dates.
///
/// Time of day is discarded before subtracting, so two timestamps on the same
/// local date yield 0 and any part of a later day counts as a whole day.
#[must_use]
pub fn days_between_datetimes<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    days_between(
        from.with_timezone(&Local).date_naive(),
        to.with_timezone(&Local).date_naive(),
    )
}

/// Annualizes a simple return, as a percentage.
///
/// `(profit / capital_at_risk) * (365 / max(days, 1)) * 100`. Returns zero
/// when `capital_at_risk` is zero; same-day and expired positions are treated
/// as one day long. Saturates like [`percent_of`].
#[must_use]
pub fn annualize_return(profit: Decimal, capital_at_risk: Decimal, days: i64) -> Decimal {
    if capital_at_risk.is_zero() {
        return Decimal::ZERO;
    }
    let days = Decimal::from(days.max(1));
    let year = Decimal::from(DAYS_PER_YEAR);
    percent_of(profit, capital_at_risk).saturating_mul(year / days)
}

/// Percentage of `part` over `whole`, zero when `whole` is zero.
///
/// Saturates at `Decimal::MAX` (or `Decimal::MIN` for a negative ratio) when
/// the result does not fit.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Generates `steps` evenly spaced prices from `min` to `max` inclusive.
///
/// Bounds are swapped if reversed. Zero steps yields an empty vector and a
/// single step yields `[min]`. Prices are rounded to cents.
///
/// # Examples
///
/// ```rust
/// use options_risk_engine::utils::generate_price_range;
/// use rust_decimal_macros::dec;
///
/// let prices = generate_price_range(dec!(40), dec!(60), 5);
/// assert_eq!(prices, vec![dec!(40), dec!(45), dec!(50), dec!(55), dec!(60)]);
/// ```
#[must_use]
pub fn generate_price_range(min: Decimal, max: Decimal, steps: usize) -> Vec<Decimal> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    match steps {
        0 => Vec::new(),
        1 => vec![round_to(low, 2)],
        _ => {
            let step = (high - low) / Decimal::from(steps - 1);
            (0..steps)
                .map(|i| round_to(low + step * Decimal::from(i), 2))
                .collect()
        }
    }
}

/// Parses a calendar date from user input.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, whose local date is used.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming `field` if `raw` is neither.
pub fn parse_calendar_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Local).date_naive())
        .map_err(|_| ValidationError::new(field, format!("'{raw}' is not a calendar date")))
}

/// Formats a date as `YYYYMMDD` (e.g. `20251222`).
#[must_use]
pub fn format_expiration_yyyymmdd(expiration: NaiveDate) -> String {
    expiration.format("%Y%m%d").to_string()
}

/// Builds a display symbol for an option leg, e.g. `AAPL-20251219-150-C`.
#[must_use]
pub fn format_contract_symbol(
    underlying: &str,
    expiration: NaiveDate,
    strike: Decimal,
    style: OptionStyle,
) -> String {
    let suffix = match style {
        OptionStyle::Call => "C",
        OptionStyle::Put => "P",
    };
    format!(
        "{}-{}-{}-{}",
        underlying,
        format_expiration_yyyymmdd(expiration),
        strike.normalize(),
        suffix
    )
}

/// Formats a currency amount as `$1,234.56` (negative: `-$1,234.56`).
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_to(value, 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{cents}")
}

/// Formats a percentage with two decimals, e.g. `12.35%`.
#[must_use]
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}%", round_to(value, 2))
}
