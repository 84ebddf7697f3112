//! Risk threshold configuration.
//!
//! [`RiskThresholds`] is a plain value passed to every check and calculator
//! call. The defaults below are contract values asserted by the test suite.
//! Callers override any subset, either with the `with_*` builder methods or
//! by deserializing a partial JSON object (missing fields keep defaults).

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Threshold bands used by the risk checks.
///
/// | Field | Default | Flag |
/// |-------|---------|------|
/// | `critical_return_pct` | 0.5 | ROO below → critical |
/// | `min_return_pct` | 1.0 | ROO below → high |
/// | `target_return_pct` | 2.0 | ROO below → low |
/// | `critical_dte` | 3 | DTE at or below → high (negative → critical) |
/// | `warning_dte` | 7 | DTE at or below → medium |
/// | `max_safe_dte` | 60 | DTE above → low |
/// | `critical_proximity_pct` | 1.0 | price within → high |
/// | `price_proximity_pct` | 5.0 | price within → medium |
/// | `deep_itm_pct` | 5.0 | short option ITM by at least → critical |
/// | `max_position_capital` | 25000 | capital above → medium |
/// | `critical_position_capital` | 50000 | capital above → high |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskThresholds {
    /// Return on capital (percent) below which a position is critical.
    #[serde(with = "rust_decimal::serde::float")]
    pub critical_return_pct: Decimal,
    /// Minimum acceptable return on capital (percent).
    #[serde(with = "rust_decimal::serde::float")]
    pub min_return_pct: Decimal,
    /// Return on capital (percent) the journal aims for.
    #[serde(with = "rust_decimal::serde::float")]
    pub target_return_pct: Decimal,
    /// Days to expiration at or below which time risk is high.
    pub critical_dte: i64,
    /// Days to expiration at or below which time risk is medium.
    pub warning_dte: i64,
    /// Days to expiration above which capital is tied up too long.
    pub max_safe_dte: i64,
    /// Distance to strike (percent of strike) at or below which price risk is high.
    #[serde(with = "rust_decimal::serde::float")]
    pub critical_proximity_pct: Decimal,
    /// Distance to strike (percent of strike) at or below which price risk is medium.
    #[serde(with = "rust_decimal::serde::float")]
    pub price_proximity_pct: Decimal,
    /// In-the-money depth (percent of strike) that makes assignment critical.
    #[serde(with = "rust_decimal::serde::float")]
    pub deep_itm_pct: Decimal,
    /// Capital at risk above which a position is oversized.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_position_capital: Decimal,
    /// Capital at risk above which a position is severely oversized.
    #[serde(with = "rust_decimal::serde::float")]
    pub critical_position_capital: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical_return_pct: dec!(0.5),
            min_return_pct: dec!(1.0),
            target_return_pct: dec!(2.0),
            critical_dte: 3,
            warning_dte: 7,
            max_safe_dte: 60,
            critical_proximity_pct: dec!(1.0),
            price_proximity_pct: dec!(5.0),
            deep_itm_pct: dec!(5.0),
            max_position_capital: dec!(25000),
            critical_position_capital: dec!(50000),
        }
    }
}

impl RiskThresholds {
    /// Returns the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses thresholds from a JSON object; missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed and
    /// `Error::InvalidThresholds` if the resulting bands are inconsistent.
    pub fn from_json(json: &str) -> Result<Self> {
        let thresholds: Self = serde_json::from_str(json)?;
        thresholds.validate()?;
        debug!(?thresholds, "loaded risk thresholds");
        Ok(thresholds)
    }

    /// Checks that every band is non-negative and the bands are ordered.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidThresholds` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("critical_return_pct", self.critical_return_pct),
            ("critical_proximity_pct", self.critical_proximity_pct),
            ("deep_itm_pct", self.deep_itm_pct),
            ("max_position_capital", self.max_position_capital),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(Error::invalid_thresholds(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
        }
        if self.critical_dte < 0 {
            return Err(Error::invalid_thresholds(
                "critical_dte",
                format!("must not be negative, got {}", self.critical_dte),
            ));
        }

        ordered("min_return_pct", self.critical_return_pct, self.min_return_pct)?;
        ordered("target_return_pct", self.min_return_pct, self.target_return_pct)?;
        ordered("warning_dte", self.critical_dte, self.warning_dte)?;
        ordered("max_safe_dte", self.warning_dte, self.max_safe_dte)?;
        ordered(
            "price_proximity_pct",
            self.critical_proximity_pct,
            self.price_proximity_pct,
        )?;
        ordered(
            "critical_position_capital",
            self.max_position_capital,
            self.critical_position_capital,
        )
    }

    /// Overrides the critical return floor.
    #[must_use]
    pub fn with_critical_return_pct(mut self, value: Decimal) -> Self {
        self.critical_return_pct = value;
        self
    }

    /// Overrides the minimum acceptable return.
    #[must_use]
    pub fn with_min_return_pct(mut self, value: Decimal) -> Self {
        self.min_return_pct = value;
        self
    }

    /// Overrides the target return.
    #[must_use]
    pub fn with_target_return_pct(mut self, value: Decimal) -> Self {
        self.target_return_pct = value;
        self
    }

    /// Overrides the time bands (critical, warning, max safe).
    #[must_use]
    pub fn with_dte_bands(mut self, critical: i64, warning: i64, max_safe: i64) -> Self {
        self.critical_dte = critical;
        self.warning_dte = warning;
        self.max_safe_dte = max_safe;
        self
    }

    /// Overrides the price proximity bands (critical, warning).
    #[must_use]
    pub fn with_proximity_bands(mut self, critical: Decimal, warning: Decimal) -> Self {
        self.critical_proximity_pct = critical;
        self.price_proximity_pct = warning;
        self
    }

    /// Overrides the deep in-the-money depth.
    #[must_use]
    pub fn with_deep_itm_pct(mut self, value: Decimal) -> Self {
        self.deep_itm_pct = value;
        self
    }

    /// Overrides the position size bands (warning, critical).
    #[must_use]
    pub fn with_capital_bands(mut self, max: Decimal, critical: Decimal) -> Self {
        self.max_position_capital = max;
        self.critical_position_capital = critical;
        self
    }
}

fn ordered<T: PartialOrd + std::fmt::Display>(field: &'static str, lower: T, value: T) -> Result<()> {
    if value < lower {
        return Err(Error::invalid_thresholds(
            field,
            format!("{value} is tighter than the preceding band {lower}"),
        ));
    }
    Ok(())
}
