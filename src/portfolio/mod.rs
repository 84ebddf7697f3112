//! Batch and portfolio analysis.
//!
//! Both entry points are generic over [`StrategyCalculator`], so a list of
//! [`Strategy`](crate::strategy::Strategy) values, a list of one concrete
//! calculator, or a list of references all work the same way.
//!
//! ## Example
//!
//! ```rust
//! use options_risk_engine::portfolio::{analyze_batch_risks, calculate_portfolio_metrics};
//! use options_risk_engine::risk::RiskThresholds;
//! use options_risk_engine::strategy::{CashSecuredPutInput, Strategy, create_strategies};
//! use rust_decimal_macros::dec;
//!
//! let positions: Vec<Strategy> = create_strategies(&[CashSecuredPutInput {
//!     symbol: "AAPL".into(),
//!     quantity: 2,
//!     strike: dec!(50),
//!     premium: dec!(1.5),
//!     expiration: "2026-01-16".into(),
//!     evaluation_date: Some("2025-12-17".into()),
//!     ..Default::default()
//! }
//! .into()])
//! .unwrap();
//!
//! let summary = analyze_batch_risks(&positions, &RiskThresholds::default());
//! assert_eq!(summary.total_positions, 1);
//!
//! let metrics = calculate_portfolio_metrics(&positions);
//! assert_eq!(metrics.total_max_profit, dec!(300));
//! ```
//!
//! [`StrategyCalculator`]: crate::strategy::StrategyCalculator

mod batch;
mod metrics;

pub use batch::{BatchRiskSummary, analyze_batch_risks};
pub use metrics::{PortfolioMetrics, calculate_portfolio_metrics};
