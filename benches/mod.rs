//! Benchmarks for options-risk-engine library.
//!
//! - **strategy_bench**: Calculator construction, metrics, payoff curves and risk checks
//! - **portfolio_bench**: Batch risk analysis and portfolio metrics


use criterion::{criterion_group, criterion_main};

// Per-position benchmarks
criterion_group!(
    strategy_benches,
    strategy_bench::strategy_construction,
    strategy_bench::strategy_analysis,
    strategy_bench::payoff_scaling,
);

// Portfolio benchmarks
criterion_group!(
    portfolio_benches,
    portfolio_bench::portfolio_operations,
    portfolio_bench::portfolio_scaling,
);

criterion_main!(strategy_benches, portfolio_benches);
