//! Risk analysis.
//!
//! ## Components
//!
//! - [`RiskThresholds`]: configurable bands with a canonical default set
//! - [`RiskFlag`]: a categorized, severity-ranked warning
//! - [`RiskCategory`] / [`RiskSeverity`]: flag classification
//! - `check_*` functions: one metric in, at most one flag out
//!
//! ## Example
//!
//! ```rust
//! use options_risk_engine::risk::{RiskSeverity, RiskThresholds, check_return_risk};
//! use rust_decimal_macros::dec;
//!
//! let thresholds = RiskThresholds::default();
//! let flag = check_return_risk(dec!(0.3), &thresholds).unwrap();
//! assert_eq!(flag.severity, RiskSeverity::Critical);
//! ```

mod checks;
mod flag;
mod thresholds;

pub use checks::{
    check_assignment_risk, check_price_risk, check_return_risk, check_size_risk, check_time_risk,
};
pub use flag::{RiskCategory, RiskFlag, RiskSeverity};
pub use thresholds::RiskThresholds;
