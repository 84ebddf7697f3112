//! Integration tests for batch risk analysis and portfolio metrics.

use options_risk_engine::portfolio::{analyze_batch_risks, calculate_portfolio_metrics};
use options_risk_engine::risk::{RiskCategory, RiskSeverity, RiskThresholds};
use options_risk_engine::strategy::{
    CashSecuredPut, CashSecuredPutInput, CoveredCallInput, LongCallInput, Strategy,
    StrategyInput, create_cash_secured_put, create_strategies, strategy_from_json,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn put(strike: Decimal, premium: Decimal, expiration: &str) -> CashSecuredPut {
    create_cash_secured_put(&CashSecuredPutInput {
        symbol: "SPY".into(),
        quantity: 1,
        strike,
        premium,
        expiration: expiration.into(),
        evaluation_date: Some("2026-01-02".into()),
        ..Default::default()
    })
    .unwrap()
}

fn mixed_inputs() -> Vec<StrategyInput> {
    vec![
        CashSecuredPutInput {
            symbol: "AAPL".into(),
            quantity: 2,
            strike: dec!(50),
            premium: dec!(1.5),
            expiration: "2026-01-16".into(),
            evaluation_date: Some("2026-01-14".into()),
            current_price: Some(dec!(49.6)),
            ..Default::default()
        }
        .into(),
        CoveredCallInput {
            symbol: "MSFT".into(),
            quantity: 3,
            strike: dec!(110),
            premium: dec!(2),
            cost_basis: dec!(100),
            expiration: "2026-02-20".into(),
            evaluation_date: Some("2026-01-21".into()),
            ..Default::default()
        }
        .into(),
        LongCallInput {
            symbol: "NVDA".into(),
            quantity: 1,
            strike: dec!(120),
            premium: dec!(3),
            expiration: "2026-06-19".into(),
            evaluation_date: Some("2026-06-01".into()),
            ..Default::default()
        }
        .into(),
    ]
}

#[test]
fn test_critical_return_with_low_time() {
    let positions = [
        put(dec!(100), dec!(0.2), "2026-02-01"),
        put(dec!(50), dec!(2), "2026-04-02"),
    ];
    let summary = analyze_batch_risks(&positions, &RiskThresholds::default());

    assert_eq!(summary.highest_severity, Some(RiskSeverity::Critical));
    assert_eq!(summary.risks_by_category[&RiskCategory::Return], 1);
    assert_eq!(summary.risks_by_category[&RiskCategory::Time], 1);
    assert_eq!(summary.total_risks, 2);
}

#[test]
fn test_empty_inputs() {
    let none: [Strategy; 0] = [];

    let summary = analyze_batch_risks(&none, &RiskThresholds::default());
    assert_eq!(summary.total_positions, 0);
    assert_eq!(summary.total_risks, 0);
    assert_eq!(summary.highest_severity, None);
    for category in RiskCategory::ALL {
        assert_eq!(summary.count_for_category(category), 0);
    }
    for severity in RiskSeverity::DESCENDING {
        assert_eq!(summary.count_for_severity(severity), 0);
    }

    let metrics = calculate_portfolio_metrics(&none);
    assert_eq!(metrics.total_max_profit, Decimal::ZERO);
    assert_eq!(metrics.total_max_loss, Decimal::ZERO);
    assert_eq!(metrics.average_dte, Decimal::ZERO);
    assert_eq!(metrics.portfolio_roo, Decimal::ZERO);
}

#[test]
fn test_mixed_portfolio_risks() {
    let positions = create_strategies(&mixed_inputs()).unwrap();
    let summary = analyze_batch_risks(&positions, &RiskThresholds::default());

    // Put: 2 DTE, underlying 0.8% below strike, in the money near expiry.
    // Covered call: 30000 of shares exceeds the max position capital.
    assert_eq!(summary.count_for_category(RiskCategory::Time), 1);
    assert_eq!(summary.count_for_category(RiskCategory::Price), 1);
    assert_eq!(summary.count_for_category(RiskCategory::Assignment), 1);
    assert_eq!(summary.count_for_category(RiskCategory::Size), 1);
    assert_eq!(summary.count_for_category(RiskCategory::Return), 0);
    assert_eq!(summary.total_risks, 4);
    assert_eq!(summary.highest_severity, Some(RiskSeverity::Critical));

    let total: usize = summary.risks_by_severity.values().sum();
    assert_eq!(total, summary.total_risks);
    assert_eq!(summary.flags.len(), summary.total_risks);
}

#[test]
fn test_mixed_portfolio_metrics() {
    let positions = create_strategies(&mixed_inputs()).unwrap();
    let metrics = calculate_portfolio_metrics(&positions);

    assert_eq!(metrics.position_count, 3);
    // 300 + 3600; the long call's unbounded upside is counted separately
    assert_eq!(metrics.total_max_profit, dec!(3900));
    // 9700 + 29400 + 300
    assert_eq!(metrics.total_max_loss, dec!(39400));
    assert_eq!(metrics.unlimited_profit_positions, 1);
    // (2 + 30 + 18) / 3
    assert_eq!(metrics.average_dte, dec!(16.7));
    // 3900 / 39400 * 100
    assert_eq!(metrics.portfolio_roo, dec!(9.90));
}

#[test]
fn test_batch_accepts_references() {
    let thin = put(dec!(100), dec!(0.2), "2026-02-01");
    let refs = [&thin, &thin];
    let summary = analyze_batch_risks(&refs, &RiskThresholds::default());
    assert_eq!(summary.total_positions, 2);
    assert_eq!(summary.count_for_category(RiskCategory::Return), 2);
}

#[test]
fn test_thresholds_from_json_drive_batch() {
    let thresholds = RiskThresholds::from_json(r#"{"maxPositionCapital": 5000}"#).unwrap();
    let positions = [put(dec!(60), dec!(1.5), "2026-02-01")];

    let summary = analyze_batch_risks(&positions, &thresholds);
    assert_eq!(summary.count_for_category(RiskCategory::Size), 1);
    assert_eq!(summary.highest_severity, Some(RiskSeverity::Medium));
}

#[test]
fn test_large_positions_saturate_totals() {
    let json = r#"{"strategy":"cashSecuredPut","symbol":"SPY","quantity":4000000000,
        "strike":1e17,"premium":1,"expiration":"2026-02-01","evaluationDate":"2026-01-02"}"#;
    let positions: Vec<Strategy> = (0..3)
        .map(|_| strategy_from_json(json))
        .collect::<Result<_, _>>()
        .unwrap();

    let metrics = calculate_portfolio_metrics(&positions);
    assert_eq!(metrics.position_count, 3);
    assert_eq!(metrics.total_max_loss, Decimal::MAX);
    assert_eq!(metrics.total_max_profit, dec!(1200000000000));

    let summary = analyze_batch_risks(&positions, &RiskThresholds::default());
    assert_eq!(summary.count_for_category(RiskCategory::Size), 3);
}
