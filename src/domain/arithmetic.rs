use super::operator::Operator;
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Evaluates `a <operator> b`.
///
/// Division by zero fails with [`CalcError::DivisionByZero`]; a result outside
/// the `Decimal` range fails with [`CalcError::Overflow`].
pub fn evaluate(a: Decimal, b: Decimal, operator: Operator) -> Result<Decimal> {
    let result = match operator {
        Operator::Add => a.checked_add(b),
        Operator::Subtract => a.checked_sub(b),
        Operator::Multiply => a.checked_mul(b),
        Operator::Divide => {
            if b.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            a.checked_div(b)
        }
    };

    let result = result.ok_or(CalcError::Overflow)?;
    debug!(%a, %b, %operator, %result, "evaluated");
    Ok(result)
}

/// Same as [`evaluate`], taking the operator as its textual symbol.
pub fn evaluate_symbol(a: Decimal, b: Decimal, symbol: &str) -> Result<Decimal> {
    let operator: Operator = symbol.parse()?;
    evaluate(a, b, operator)
}
