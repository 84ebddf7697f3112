//! Strategy Analysis Example
//!
//! This example walks through each supported strategy:
//! - Building calculators from form input
//! - Reading max profit, max loss, breakeven and returns
//! - Sampling the payoff curve at expiration
//! - Checking the position against the default risk thresholds
//!
//! Run with: `cargo run --example strategy_analysis`

use options_risk_engine::Result;
use options_risk_engine::risk::RiskThresholds;
use options_risk_engine::strategy::{
    CashSecuredPutInput, CoveredCallInput, LongCallInput, StrategyCalculator,
    create_cash_secured_put, create_covered_call, create_long_call,
};
use options_risk_engine::utils::{format_currency, format_percentage};
use rust_decimal_macros::dec;
use tracing::info;

fn report<S: StrategyCalculator>(position: &S, thresholds: &RiskThresholds) {
    let metrics = position.metrics();
    info!("{} ({})", metrics.contract_symbol, metrics.strategy);
    info!("  Max Profit: {}", metrics.max_profit);
    info!("  Max Loss: {}", format_currency(metrics.max_loss));
    info!("  Breakeven: {}", format_currency(metrics.breakeven));
    info!("  Capital at Risk: {}", format_currency(metrics.capital_at_risk));
    match (metrics.return_on_capital, metrics.annualized_return) {
        (Some(roo), Some(annualized)) => info!(
            "  Return: {} ({} annualized)",
            format_percentage(roo),
            format_percentage(annualized)
        ),
        _ => info!("  Return: unbounded"),
    }
    info!("  Days to Expiration: {}", metrics.days_to_expiration);
    if let Some(greeks) = metrics.greeks {
        info!(
            "  Greeks: delta {} gamma {} theta {}",
            greeks.delta, greeks.gamma, greeks.theta
        );
    }

    let strike = position.terms().strike();
    info!("  Payoff at expiration:");
    for point in position.payoff_curve(strike * dec!(0.8), strike * dec!(1.2), 5) {
        info!(
            "    {:>10} -> {:>12}",
            format_currency(point.price),
            format_currency(point.profit)
        );
    }

    let flags = position.analyze_risks(thresholds);
    if flags.is_empty() {
        info!("  No risk flags ✓");
    }
    for flag in flags {
        info!("  {flag}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Strategy Analysis Example ===");
    let thresholds = RiskThresholds::default();

    info!("\n--- Cash-Secured Put ---");
    let put = create_cash_secured_put(&CashSecuredPutInput {
        symbol: "AAPL".into(),
        quantity: 2,
        strike: dec!(50),
        premium: dec!(1.5),
        expiration: "2026-01-16".into(),
        evaluation_date: Some("2025-12-17".into()),
        fee: Some(dec!(1.30)),
        current_price: Some(dec!(49.2)),
    })?;
    report(&put, &thresholds);

    info!("\n--- Covered Call ---");
    let covered_call = create_covered_call(&CoveredCallInput {
        symbol: "MSFT".into(),
        quantity: 1,
        strike: dec!(110),
        premium: dec!(2),
        cost_basis: dec!(100),
        expiration: "2026-02-20".into(),
        evaluation_date: Some("2026-01-21".into()),
        fee: None,
        current_price: Some(dec!(104)),
    })?;
    report(&covered_call, &thresholds);

    info!("\n--- Long Call ---");
    let long_call = create_long_call(&LongCallInput {
        symbol: "NVDA".into(),
        quantity: 3,
        strike: dec!(120),
        premium: dec!(3),
        expiration: "2026-06-19".into(),
        evaluation_date: Some("2026-06-01".into()),
        fee: None,
        current_price: Some(dec!(117.5)),
    })?;
    report(&long_call, &thresholds);

    info!("\n--- Rejected Input ---");
    let rejected = create_cash_secured_put(&CashSecuredPutInput {
        symbol: "AAPL".into(),
        quantity: 0,
        strike: dec!(50),
        premium: dec!(1.5),
        expiration: "2026-01-16".into(),
        ..Default::default()
    });
    if let Err(err) = rejected {
        info!("Validation failed: {err}");
    }

    info!("\n=== Example Complete ===");
    Ok(())
}
