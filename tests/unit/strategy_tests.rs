//! Integration tests for the strategy calculators.

use options_risk_engine::Error;
use options_risk_engine::risk::{RiskCategory, RiskSeverity, RiskThresholds};
use options_risk_engine::strategy::{
    CashSecuredPutInput, CoveredCallInput, LongCallInput, Profit, StrategyCalculator,
    StrategyKind, create_cash_secured_put, create_covered_call, create_long_call,
    strategy_from_json,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn csp(strike: Decimal, premium: Decimal, quantity: i64) -> CashSecuredPutInput {
    CashSecuredPutInput {
        symbol: "AAPL".into(),
        quantity,
        strike,
        premium,
        expiration: "2026-01-16".into(),
        evaluation_date: Some("2025-12-17".into()),
        ..Default::default()
    }
}

#[test]
fn test_cash_secured_put_scenario() {
    let put = create_cash_secured_put(&csp(dec!(50), dec!(1.5), 2)).unwrap();

    assert_eq!(put.max_profit(), Profit::Limited(dec!(300.00)));
    assert_eq!(put.max_loss(), dec!(9700.00));
    assert_eq!(put.breakeven(), dec!(48.50));
}

#[test]
fn test_cash_secured_put_formulas_hold() {
    for (strike, premium, quantity) in [
        (dec!(25), dec!(0.35), 1),
        (dec!(180), dec!(4.2), 3),
        (dec!(7.5), dec!(0.05), 10),
    ] {
        let put = create_cash_secured_put(&csp(strike, premium, quantity)).unwrap();
        let shares = Decimal::from(quantity) * dec!(100);
        assert_eq!(put.max_loss(), (strike - premium) * shares);
        assert_eq!(put.max_profit(), Profit::Limited(premium * shares));
        assert_eq!(put.breakeven(), strike - premium);
    }
}

#[test]
fn test_covered_call_scenario() {
    let call = create_covered_call(&CoveredCallInput {
        symbol: "MSFT".into(),
        quantity: 1,
        strike: dec!(110),
        premium: dec!(2),
        cost_basis: dec!(100),
        expiration: "2026-02-20".into(),
        evaluation_date: Some("2026-01-21".into()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(call.max_profit(), Profit::Limited(dec!(1200.00)));
    assert_eq!(call.max_loss(), dec!(9800.00));
    assert_eq!(call.breakeven(), dec!(98.00));
    // ((strike - cost_basis) + premium) * 100 * qty
    assert_eq!(
        call.max_profit().limited(),
        Some((dec!(110) - dec!(100) + dec!(2)) * dec!(100))
    );
}

#[test]
fn test_covered_call_formulas_hold() {
    for (strike, cost_basis, premium, quantity) in [
        (dec!(110), dec!(100), dec!(2), 1),
        (dec!(55), dec!(48.25), dec!(0.9), 4),
        (dec!(305), dec!(290), dec!(6.4), 2),
        (dec!(12.5), dec!(12), dec!(0.15), 25),
    ] {
        let call = create_covered_call(&CoveredCallInput {
            symbol: "MSFT".into(),
            quantity,
            strike,
            premium,
            cost_basis,
            expiration: "2026-02-20".into(),
            evaluation_date: Some("2026-01-21".into()),
            ..Default::default()
        })
        .unwrap();
        let shares = Decimal::from(quantity) * dec!(100);
        assert_eq!(
            call.max_profit(),
            Profit::Limited(((strike - cost_basis) + premium) * shares)
        );
        assert_eq!(call.max_loss(), (cost_basis - premium) * shares);
        assert_eq!(call.breakeven(), cost_basis - premium);
    }
}

#[test]
fn test_long_call_scenario() {
    let call = create_long_call(&LongCallInput {
        symbol: "NVDA".into(),
        quantity: 1,
        strike: dec!(120),
        premium: dec!(3),
        expiration: "2026-06-19".into(),
        evaluation_date: Some("2026-06-01".into()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(call.max_loss(), dec!(300.00));
    assert_eq!(call.max_profit(), Profit::Unlimited);
    assert_eq!(call.breakeven(), dec!(123));
    assert_eq!(call.return_on_capital(), None);
}

#[test]
fn test_validation_names_field() {
    let cases = [
        (csp(dec!(50), dec!(1.5), 0), "quantity"),
        (csp(dec!(50), dec!(1.5), -3), "quantity"),
        (csp(dec!(0), dec!(1.5), 1), "strike"),
        (csp(dec!(50), dec!(-0.01), 1), "premium"),
        (
            CashSecuredPutInput {
                expiration: "16/01/2026".into(),
                ..csp(dec!(50), dec!(1.5), 1)
            },
            "expiration",
        ),
    ];
    for (input, field) in cases {
        let err = create_cash_secured_put(&input).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.field(), Some(field));
    }
}

#[test]
fn test_positions_too_large_to_value_are_rejected() {
    let strike = Decimal::from(1_000_000_000_000_000_000u64);
    let err = create_cash_secured_put(&csp(strike, dec!(1), 4_000_000_000)).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.field(), Some("strike"));

    let err = create_covered_call(&CoveredCallInput {
        symbol: "MSFT".into(),
        quantity: 4_000_000_000,
        strike: dec!(110),
        premium: dec!(2),
        cost_basis: strike,
        expiration: "2026-02-20".into(),
        evaluation_date: Some("2026-01-21".into()),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.field(), Some("cost_basis"));
}

#[test]
fn test_extreme_return_ratio_saturates() {
    let premium = Decimal::from(100_000_000_000_000_000u64);
    let put = create_cash_secured_put(&csp(dec!(0.0000000001), premium, 1)).unwrap();

    assert_eq!(put.return_on_capital(), Some(Decimal::MAX));
    assert_eq!(put.annualized_return(), Some(Decimal::MAX));
    assert_eq!(put.metrics().return_on_capital, Some(Decimal::MAX));
    assert!(
        put.analyze_risks(&RiskThresholds::default())
            .iter()
            .all(|flag| flag.category != RiskCategory::Return)
    );
}

#[test]
fn test_zero_premium_is_allowed() {
    let put = create_cash_secured_put(&csp(dec!(50), Decimal::ZERO, 1)).unwrap();
    assert_eq!(put.max_profit(), Profit::Limited(Decimal::ZERO));
    assert_eq!(put.return_on_capital(), Some(Decimal::ZERO));
}

#[test]
fn test_expiration_today_is_zero_dte() {
    let put = create_cash_secured_put(&CashSecuredPutInput {
        evaluation_date: Some("2026-01-16".into()),
        ..csp(dec!(50), dec!(1.5), 1)
    })
    .unwrap();
    assert_eq!(put.days_to_expiration(), 0);

    let flags = put.analyze_risks(&RiskThresholds::default());
    let time = flags
        .iter()
        .find(|flag| flag.category == RiskCategory::Time)
        .unwrap();
    assert_eq!(time.severity, RiskSeverity::High);
}

#[test]
fn test_metrics_snapshot() {
    let put = create_cash_secured_put(&CashSecuredPutInput {
        current_price: Some(dec!(55)),
        ..csp(dec!(50), dec!(1.5), 2)
    })
    .unwrap();
    let metrics = put.metrics();

    assert_eq!(metrics.strategy, StrategyKind::CashSecuredPut);
    assert_eq!(metrics.contract_symbol, "AAPL-20260116-50-P");
    assert_eq!(metrics.quantity, 2);
    assert_eq!(metrics.capital_at_risk, dec!(10000));
    assert_eq!(metrics.return_on_capital, Some(dec!(3)));
    assert_eq!(metrics.annualized_return, Some(dec!(36.5)));
    assert_eq!(metrics.days_to_expiration, 30);
    assert!(metrics.greeks.is_some());
}

#[test]
fn test_payoff_curve_crosses_breakeven() {
    let put = create_cash_secured_put(&csp(dec!(50), dec!(1.5), 1)).unwrap();
    let curve = put.payoff_curve(dec!(45), dec!(55), 11);

    assert_eq!(curve.len(), 11);
    assert_eq!(curve[0].price, dec!(45));
    assert_eq!(curve[10].price, dec!(55));
    assert!(curve[0].profit < Decimal::ZERO);
    assert_eq!(curve[10].profit, dec!(150));
    assert!(curve.windows(2).all(|pair| pair[0].profit <= pair[1].profit));
}

#[test]
fn test_strategy_from_json_covered_call() {
    let strategy = strategy_from_json(
        r#"{
            "strategy": "coveredCall",
            "symbol": "msft",
            "quantity": 1,
            "strike": 110,
            "premium": 2,
            "costBasis": 100,
            "expiration": "2026-02-20",
            "evaluationDate": "2026-01-21",
            "fee": 1.3
        }"#,
    )
    .unwrap();

    assert_eq!(strategy.kind(), StrategyKind::CoveredCall);
    assert_eq!(strategy.terms().symbol(), "MSFT");
    assert_eq!(strategy.max_profit(), Profit::Limited(dec!(1198.70)));
    assert_eq!(strategy.max_loss(), dec!(9801.30));
}

#[test]
fn test_custom_thresholds_change_flags() {
    let put = create_cash_secured_put(&csp(dec!(50), dec!(1.5), 2)).unwrap();
    assert!(put.analyze_risks(&RiskThresholds::default()).is_empty());

    let strict = RiskThresholds::default().with_target_return_pct(dec!(5));
    let flags = put.analyze_risks(&strict);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].category, RiskCategory::Return);
    assert_eq!(flags[0].severity, RiskSeverity::Low);
}
