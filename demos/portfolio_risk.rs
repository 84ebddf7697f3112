//! Portfolio Risk Example
//!
//! This example demonstrates portfolio-level analysis:
//! - Loading positions from tagged JSON input
//! - Loading custom risk thresholds from JSON
//! - Aggregating risk flags by category and severity
//! - Summing max profit/loss across mixed strategies
//!
//! Run with: `cargo run --example portfolio_risk`

use options_risk_engine::Result;
use options_risk_engine::portfolio::{analyze_batch_risks, calculate_portfolio_metrics};
use options_risk_engine::risk::{RiskCategory, RiskSeverity, RiskThresholds};
use options_risk_engine::strategy::{Strategy, StrategyCalculator, strategy_from_json};
use options_risk_engine::utils::format_currency;
use tracing::info;

const POSITIONS: [&str; 4] = [
    r#"{"strategy":"cashSecuredPut","symbol":"AAPL","quantity":2,"strike":50,"premium":1.5,
        "expiration":"2026-01-16","evaluationDate":"2026-01-13","currentPrice":49.7}"#,
    r#"{"strategy":"cashSecuredPut","symbol":"AMD","quantity":1,"strike":140,"premium":0.5,
        "expiration":"2026-02-20","evaluationDate":"2026-01-13"}"#,
    r#"{"strategy":"coveredCall","symbol":"MSFT","quantity":3,"strike":110,"premium":2,
        "costBasis":100,"expiration":"2026-04-17","evaluationDate":"2026-01-13","currentPrice":112}"#,
    r#"{"strategy":"longCall","symbol":"NVDA","quantity":1,"strike":120,"premium":3,
        "expiration":"2026-06-19","evaluationDate":"2026-01-13"}"#,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Portfolio Risk Example ===");

    let positions = POSITIONS
        .into_iter()
        .map(strategy_from_json)
        .collect::<Result<Vec<Strategy>>>()?;
    info!("Loaded {} positions:", positions.len());
    for position in &positions {
        info!(
            "  {} {} x{}",
            position.kind(),
            position.contract_symbol(),
            position.terms().quantity()
        );
    }

    // Tighter sizing and a longer comfort window than the defaults
    let thresholds = RiskThresholds::from_json(
        r#"{"maxPositionCapital": 15000, "criticalPositionCapital": 30000, "maxSafeDte": 120}"#,
    )?;
    info!("\nRisk Thresholds:");
    info!("  Target Return: {}%", thresholds.target_return_pct);
    info!("  Max Safe DTE: {}", thresholds.max_safe_dte);
    info!(
        "  Max Position Capital: {}",
        format_currency(thresholds.max_position_capital)
    );

    let summary = analyze_batch_risks(&positions, &thresholds);
    info!("\n--- Batch Risk Summary ---");
    info!("{summary}");
    for category in RiskCategory::ALL {
        info!("  {:<10} {}", category, summary.count_for_category(category));
    }
    for severity in RiskSeverity::DESCENDING {
        info!("  {:<10} {}", severity, summary.count_for_severity(severity));
    }
    info!("Flags:");
    for flag in &summary.flags {
        info!("  {flag}");
    }

    let metrics = calculate_portfolio_metrics(&positions);
    info!("\n--- Portfolio Metrics ---");
    info!("{metrics}");

    info!("\nJSON output:");
    info!("{}", serde_json::to_string_pretty(&metrics)?);

    info!("\n=== Example Complete ===");
    Ok(())
}
