//! Serialized output shape, as consumed by the journal front end.

use options_risk_engine::portfolio::analyze_batch_risks;
use options_risk_engine::risk::RiskThresholds;
use options_risk_engine::strategy::{
    LongCallInput, StrategyCalculator, StrategyInput, create_long_call, create_strategy,
};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_position_metrics_json() {
    let input: StrategyInput = serde_json::from_value(json!({
        "strategy": "cashSecuredPut",
        "symbol": "AAPL",
        "quantity": 2,
        "strike": 50,
        "premium": 1.5,
        "expiration": "2026-01-16",
        "evaluationDate": "2025-12-17"
    }))
    .unwrap();
    let metrics = create_strategy(&input).unwrap().metrics();
    let value = serde_json::to_value(&metrics).unwrap();

    assert_eq!(value["strategy"], "cashSecuredPut");
    assert_eq!(value["symbol"], "AAPL");
    assert_eq!(value["contractSymbol"], "AAPL-20260116-50-P");
    assert_eq!(value["maxProfit"], 300.0);
    assert_eq!(value["maxLoss"], 9700.0);
    assert_eq!(value["breakeven"], 48.5);
    assert_eq!(value["returnOnCapital"], 3.0);
    assert_eq!(value["daysToExpiration"], 30);
    assert!(value["greeks"].is_null());
}

#[test]
fn test_unlimited_profit_json() {
    let call = create_long_call(&LongCallInput {
        symbol: "NVDA".into(),
        quantity: 1,
        strike: dec!(120),
        premium: dec!(3),
        expiration: "2026-06-19".into(),
        evaluation_date: Some("2026-06-01".into()),
        current_price: Some(dec!(118)),
        ..Default::default()
    })
    .unwrap();
    let value = serde_json::to_value(call.metrics()).unwrap();

    assert_eq!(value["maxProfit"], "unlimited");
    assert!(value["returnOnCapital"].is_null());
    assert!(value["annualizedReturn"].is_null());
    assert!(value["greeks"]["delta"].is_number());
    assert!(value["greeks"]["theta"].as_f64().unwrap() < 0.0);
}

#[test]
fn test_batch_summary_json() {
    let input: StrategyInput = serde_json::from_value(json!({
        "strategy": "cashSecuredPut",
        "symbol": "SPY",
        "quantity": 1,
        "strike": 100,
        "premium": 0.2,
        "expiration": "2026-02-01",
        "evaluationDate": "2026-01-02"
    }))
    .unwrap();
    let positions = [create_strategy(&input).unwrap()];
    let value =
        serde_json::to_value(analyze_batch_risks(&positions, &RiskThresholds::default())).unwrap();

    assert_eq!(value["totalPositions"], 1);
    assert_eq!(value["totalRisks"], 1);
    assert_eq!(value["highestSeverity"], "critical");
    assert_eq!(
        value["risksByCategory"],
        json!({"return": 1, "size": 0, "time": 0, "price": 0, "assignment": 0})
    );
    assert_eq!(
        value["risksBySeverity"],
        json!({"low": 0, "medium": 0, "high": 0, "critical": 1})
    );
    assert_eq!(value["flags"][0]["category"], "return");
    assert_eq!(value["flags"][0]["value"], 0.2);
    assert_eq!(value["flags"][0]["threshold"], 0.5);
}

#[test]
fn test_unknown_strategy_tag_is_rejected() {
    let result = serde_json::from_value::<StrategyInput>(json!({
        "strategy": "ironCondor",
        "symbol": "SPY",
        "quantity": 1,
        "strike": 100,
        "premium": 1,
        "expiration": "2026-02-01"
    }));
    assert!(result.is_err());
}

#[test]
fn test_thresholds_round_trip_defaults() {
    let value = serde_json::to_value(RiskThresholds::default()).unwrap();
    assert_eq!(value["criticalDte"], 3);
    assert_eq!(value["maxPositionCapital"], 25000.0);

    let parsed: RiskThresholds = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, RiskThresholds::default());
}
