//! Threshold checks.
//!
//! Each check looks at one metric and returns at most one [`RiskFlag`]: the
//! one for the tightest band the metric crossed. A return of 0.2% with the
//! default thresholds is `critical`, never `critical` plus `high` plus `low`.

use super::flag::{RiskCategory, RiskFlag, RiskSeverity};
use super::thresholds::RiskThresholds;
use crate::utils::{percent_of, round_to};
use rust_decimal::Decimal;
use tracing::trace;

fn raise(
    category: RiskCategory,
    severity: RiskSeverity,
    message: String,
    value: Decimal,
    threshold: Decimal,
) -> Option<RiskFlag> {
    trace!(%category, %severity, %value, %threshold, "risk flag raised");
    Some(RiskFlag::new(category, severity, message, value, threshold))
}

/// Checks return on capital (percent) against the return bands.
///
/// # Arguments
///
/// * `return_pct` - Return on capital at risk, as a percentage
/// * `thresholds` - Bands to compare against
#[must_use]
pub fn check_return_risk(return_pct: Decimal, thresholds: &RiskThresholds) -> Option<RiskFlag> {
    let value = round_to(return_pct, 2);
    let (severity, threshold, label) = if value < thresholds.critical_return_pct {
        (RiskSeverity::Critical, thresholds.critical_return_pct, "critical floor")
    } else if value < thresholds.min_return_pct {
        (RiskSeverity::High, thresholds.min_return_pct, "minimum")
    } else if value < thresholds.target_return_pct {
        (RiskSeverity::Low, thresholds.target_return_pct, "target")
    } else {
        return None;
    };
    raise(
        RiskCategory::Return,
        severity,
        format!("return on capital {value}% is below the {threshold}% {label}"),
        value,
        threshold,
    )
}

/// Checks days to expiration against the time bands.
///
/// Negative DTE means the position is past expiration, which is always
/// critical.
///
/// # Arguments
///
/// * `days_to_expiration` - Calendar days left, negative once expired
/// * `thresholds` - Bands to compare against
#[must_use]
pub fn check_time_risk(days_to_expiration: i64, thresholds: &RiskThresholds) -> Option<RiskFlag> {
    let value = Decimal::from(days_to_expiration);
    let (severity, threshold, message) = if days_to_expiration < 0 {
        (
            RiskSeverity::Critical,
            0,
            format!("position expired {} days ago", -days_to_expiration),
        )
    } else if days_to_expiration <= thresholds.critical_dte {
        (
            RiskSeverity::High,
            thresholds.critical_dte,
            format!("expires in {days_to_expiration} days"),
        )
    } else if days_to_expiration <= thresholds.warning_dte {
        (
            RiskSeverity::Medium,
            thresholds.warning_dte,
            format!("expires in {days_to_expiration} days"),
        )
    } else if days_to_expiration > thresholds.max_safe_dte {
        (
            RiskSeverity::Low,
            thresholds.max_safe_dte,
            format!(
                "{days_to_expiration} days to expiration ties up capital beyond {} days",
                thresholds.max_safe_dte
            ),
        )
    } else {
        return None;
    };
    raise(
        RiskCategory::Time,
        severity,
        message,
        value,
        Decimal::from(threshold),
    )
}

/// Checks how close the underlying trades to the strike, as percent of strike.
///
/// # Arguments
///
/// * `current_price` - Last known price of the underlying
/// * `strike` - Strike of the short option; a non-positive strike never flags
/// * `thresholds` - Bands to compare against
#[must_use]
pub fn check_price_risk(
    current_price: Decimal,
    strike: Decimal,
    thresholds: &RiskThresholds,
) -> Option<RiskFlag> {
    if strike <= Decimal::ZERO {
        return None;
    }
    let distance = round_to(percent_of((current_price - strike).abs(), strike), 2);
    let (severity, threshold) = if distance <= thresholds.critical_proximity_pct {
        (RiskSeverity::High, thresholds.critical_proximity_pct)
    } else if distance <= thresholds.price_proximity_pct {
        (RiskSeverity::Medium, thresholds.price_proximity_pct)
    } else {
        return None;
    };
    raise(
        RiskCategory::Price,
        severity,
        format!("underlying at {current_price} is within {distance}% of the {strike} strike"),
        distance,
        threshold,
    )
}

/// Checks assignment exposure of a short option.
///
/// `itm_pct` is how far the option is in the money, as percent of strike;
/// zero or negative means out of the money and never flags.
///
/// # Arguments
///
/// * `itm_pct` - Depth in the money, as percent of strike
/// * `days_to_expiration` - Calendar days left
/// * `thresholds` - Bands to compare against
#[must_use]
pub fn check_assignment_risk(
    itm_pct: Decimal,
    days_to_expiration: i64,
    thresholds: &RiskThresholds,
) -> Option<RiskFlag> {
    let value = round_to(itm_pct, 2);
    if value <= Decimal::ZERO {
        return None;
    }
    let deep = value >= thresholds.deep_itm_pct;
    let severity = if deep || days_to_expiration <= thresholds.critical_dte {
        RiskSeverity::Critical
    } else if days_to_expiration <= thresholds.warning_dte {
        RiskSeverity::High
    } else {
        RiskSeverity::Medium
    };
    let threshold = if deep {
        thresholds.deep_itm_pct
    } else {
        Decimal::ZERO
    };
    raise(
        RiskCategory::Assignment,
        severity,
        format!("short option is {value}% in the money with {days_to_expiration} days left"),
        value,
        threshold,
    )
}

/// Checks capital committed to a single position.
///
/// # Arguments
///
/// * `capital_at_risk` - Collateral, share outlay or debit of the position
/// * `thresholds` - Bands to compare against
#[must_use]
pub fn check_size_risk(capital_at_risk: Decimal, thresholds: &RiskThresholds) -> Option<RiskFlag> {
    let value = round_to(capital_at_risk, 2);
    let (severity, threshold) = if value > thresholds.critical_position_capital {
        (RiskSeverity::High, thresholds.critical_position_capital)
    } else if value > thresholds.max_position_capital {
        (RiskSeverity::Medium, thresholds.max_position_capital)
    } else {
        return None;
    };
    raise(
        RiskCategory::Size,
        severity,
        format!("capital at risk {value} exceeds {threshold}"),
        value,
        threshold,
    )
}
