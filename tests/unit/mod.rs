//! Integration tests for the options risk engine.

mod output_tests;
mod portfolio_tests;
mod strategy_tests;
