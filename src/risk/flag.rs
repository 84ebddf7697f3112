//! Risk flag types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What aspect of a position a flag is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    /// Return on capital is too thin.
    Return,
    /// Too much capital committed to one position.
    Size,
    /// Expiration is too close, too far, or already past.
    Time,
    /// Underlying is trading close to the strike.
    Price,
    /// Short option is in the money.
    Assignment,
}

impl RiskCategory {
    /// Every category, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Return,
        Self::Size,
        Self::Time,
        Self::Price,
        Self::Assignment,
    ];

    /// Lowercase name, as serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Return => "return",
            Self::Size => "size",
            Self::Time => "time",
            Self::Price => "price",
            Self::Assignment => "assignment",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How bad a flag is. Ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    /// Worth knowing.
    Low,
    /// Worth watching.
    Medium,
    /// Needs attention soon.
    High,
    /// Needs attention now.
    Critical,
}

impl RiskSeverity {
    /// Every severity, most severe first.
    pub const DESCENDING: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Lowercase name, as serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized warning raised when a metric crosses a configured threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlag {
    /// Aspect of the position.
    pub category: RiskCategory,
    /// Severity of the band crossed.
    pub severity: RiskSeverity,
    /// Human readable description.
    pub message: String,
    /// Metric value that triggered the flag.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// Threshold the value crossed.
    #[serde(with = "rust_decimal::serde::float")]
    pub threshold: Decimal,
}

impl RiskFlag {
    /// Creates a new risk flag.
    #[must_use]
    pub fn new(
        category: RiskCategory,
        severity: RiskSeverity,
        message: impl Into<String>,
        value: Decimal,
        threshold: Decimal,
    ) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            value,
            threshold,
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.severity, self.category, self.message)
    }
}
