//! # Options Risk Engine - Strategy Valuation and Risk Analysis
//!
//! A Rust library that turns a described option position into profit/loss
//! economics, time-value metrics, approximate Greeks and categorized risk
//! warnings, then aggregates those across a portfolio.
//!
//! ## Key Features
//!
//! - **Exact Decimal Money Math**: Every price, premium and P/L figure is a
//!   [`rust_decimal::Decimal`], rounded half away from zero for display.
//!
//! - **Validated, Immutable Calculators**: Inputs are validated once at
//!   construction; a built calculator never changes and never fails.
//!
//! - **Three Strategies**: Covered call, cash-secured put and long call, all
//!   behind the shared [`strategy::StrategyCalculator`] capability set.
//!
//! - **Configurable Risk Bands**: [`risk::RiskThresholds`] drives return,
//!   time, price-proximity, assignment and position-size checks.
//!
//! - **Portfolio Aggregation**: Flag counts by category and severity, summed
//!   max profit/loss, average DTE and portfolio return on capital.
//!
//! - **OptionStratLib Integration**: Uses `OptionStyle` from
//!   [OptionStratLib](https://crates.io/crates/optionstratlib) for the
//!   call/put distinction.
//!
//! - **Result-Based Error Handling**: Construction returns `Result<T, Error>`
//!   naming the offending field.
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! ```text
//! *Input (raw form values, serde)
//!   └── create_* / strategy_from_json (validation)
//!         └── CoveredCall | CashSecuredPut | LongCall (immutable calculators)
//!               ├── metrics(): max profit/loss, breakeven, ROO, DTE, Greeks
//!               ├── payoff_curve(): P/L at expiration over a price range
//!               └── analyze_risks(&RiskThresholds) -> Vec<RiskFlag>
//!                     └── analyze_batch_risks / calculate_portfolio_metrics
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`strategy`] | Strategy inputs, calculators and the `StrategyCalculator` trait |
//! | [`risk`] | Risk thresholds, flags and per-metric checks |
//! | [`portfolio`] | Batch risk aggregation and portfolio metrics |
//! | [`greeks`] | Closed-form delta/gamma/theta approximations |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Rounding, date math, price ranges and display formatting |
//!
//! ## Example Usage
//!
//! ### Analyzing a Single Position
//!
//! ```rust
//! use options_risk_engine::risk::{RiskCategory, RiskThresholds};
//! use options_risk_engine::strategy::{CoveredCallInput, StrategyCalculator, create_covered_call};
//! use rust_decimal_macros::dec;
//!
//! let call = create_covered_call(&CoveredCallInput {
//!     symbol: "MSFT".into(),
//!     quantity: 1,
//!     strike: dec!(110),
//!     premium: dec!(2),
//!     cost_basis: dec!(100),
//!     expiration: "2026-02-20".into(),
//!     evaluation_date: Some("2026-01-21".into()),
//!     current_price: Some(dec!(120)),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let metrics = call.metrics();
//! assert_eq!(metrics.max_loss, dec!(9800));
//! assert_eq!(metrics.return_on_capital, Some(dec!(12)));
//!
//! let flags = call.analyze_risks(&RiskThresholds::default());
//! assert_eq!(flags[0].category, RiskCategory::Assignment);
//! ```
//!
//! ### Aggregating a Portfolio
//!
//! ```rust
//! use options_risk_engine::portfolio::{analyze_batch_risks, calculate_portfolio_metrics};
//! use options_risk_engine::risk::RiskThresholds;
//! use options_risk_engine::strategy::strategy_from_json;
//!
//! let positions = vec![
//!     strategy_from_json(r#"{"strategy":"cashSecuredPut","symbol":"AAPL","quantity":2,
//!         "strike":50,"premium":1.5,"expiration":"2026-01-16","evaluationDate":"2025-12-17"}"#)
//!     .unwrap(),
//!     strategy_from_json(r#"{"strategy":"longCall","symbol":"NVDA","quantity":1,
//!         "strike":120,"premium":3,"expiration":"2026-06-19","evaluationDate":"2026-06-01"}"#)
//!     .unwrap(),
//! ];
//!
//! let summary = analyze_batch_risks(&positions, &RiskThresholds::default());
//! let metrics = calculate_portfolio_metrics(&positions);
//! assert_eq!(summary.total_positions, 2);
//! assert_eq!(metrics.unlimited_profit_positions, 1);
//! ```
//!
//! ## Examples
//!
//! | Example | Description |
//! |---------|-------------|
//! | `strategy_analysis` | Metrics, payoff curve and risk flags per strategy |
//! | `portfolio_risk` | Mixed portfolio aggregation with custom thresholds |
//!
//! Run examples with:
//! ```bash
//! cargo run --example strategy_analysis
//! cargo run --example portfolio_risk
//! ```
//!
//! ## Benchmarks
//!
//! - **strategy_bench**: Construction, metrics, payoff curves and risk checks
//! - **portfolio_bench**: Batch risk analysis and portfolio metrics
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench
//! ```
//!
//! ## Dependencies
//!
//! - **optionstratlib** (0.13): `OptionStyle`
//! - **rust_decimal** (1.39): Precise decimal arithmetic and `maths` functions
//! - **chrono** (0.4): Calendar dates and day counts
//! - **tracing** (0.1): Structured logging
//! - **thiserror** (2.0): Error handling
//! - **serde** (1.0) / **serde_json** (1.0): Input, output and threshold serialization

pub mod error;
pub mod greeks;
pub mod portfolio;
pub mod risk;
pub mod strategy;
pub mod utils;

pub use error::{Error, Result, ValidationError};
pub use portfolio::{
    BatchRiskSummary, PortfolioMetrics, analyze_batch_risks, calculate_portfolio_metrics,
};
pub use risk::{RiskCategory, RiskFlag, RiskSeverity, RiskThresholds};
pub use strategy::{Profit, Strategy, StrategyCalculator, StrategyInput, StrategyKind};
