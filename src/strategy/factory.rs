//! Factory functions: raw form input in, validated calculator out.

use super::input::{CashSecuredPutInput, CoveredCallInput, LongCallInput, StrategyInput};
use super::{CashSecuredPut, CoveredCall, LongCall, Strategy};
use crate::error::Result;
use tracing::debug;

/// Builds a covered call calculator.
///
/// # Errors
///
/// Returns `Error::Validation` naming the first invalid field.
pub fn create_covered_call(input: &CoveredCallInput) -> Result<CoveredCall> {
    CoveredCall::new(input)
}

/// Builds a cash-secured put calculator.
///
/// # Errors
///
/// Returns `Error::Validation` naming the first invalid field.
pub fn create_cash_secured_put(input: &CashSecuredPutInput) -> Result<CashSecuredPut> {
    CashSecuredPut::new(input)
}

/// Builds a long call calculator.
///
/// # Errors
///
/// Returns `Error::Validation` naming the first invalid field.
pub fn create_long_call(input: &LongCallInput) -> Result<LongCall> {
    LongCall::new(input)
}

/// Builds the calculator matching the input's strategy.
///
/// # Errors
///
/// Returns `Error::Validation` naming the first invalid field.
pub fn create_strategy(input: &StrategyInput) -> Result<Strategy> {
    Ok(match input {
        StrategyInput::CoveredCall(input) => create_covered_call(input)?.into(),
        StrategyInput::CashSecuredPut(input) => create_cash_secured_put(input)?.into(),
        StrategyInput::LongCall(input) => create_long_call(input)?.into(),
    })
}

/// Builds calculators for a list of inputs, stopping at the first invalid one.
///
/// # Errors
///
/// Returns the first `Error::Validation` encountered.
pub fn create_strategies(inputs: &[StrategyInput]) -> Result<Vec<Strategy>> {
    let strategies = inputs
        .iter()
        .map(create_strategy)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = strategies.len(), "created strategy calculators");
    Ok(strategies)
}

/// Parses a tagged JSON input and builds its calculator.
///
/// # Errors
///
/// Returns `Error::Config` for malformed JSON and `Error::Validation` for
/// well-formed input that breaks a business rule.
pub fn strategy_from_json(json: &str) -> Result<Strategy> {
    let input: StrategyInput = serde_json::from_str(json)?;
    create_strategy(&input)
}
