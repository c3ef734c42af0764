use crate::domain::operator::Operator;
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

/// Below this magnitude a number has no `Decimal` representation other than zero.
const SMALLEST_MAGNITUDE: f64 = 1e-28;

/// Parses user text into a number.
///
/// Leading and trailing whitespace is ignored. Both plain (`12.5`) and
/// scientific (`1.25e1`) notation are accepted. Numeric text whose magnitude
/// exceeds the `Decimal` range fails with [`CalcError::Overflow`]; magnitudes
/// below its smallest step round to zero.
pub fn parse_number(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if let Ok(value) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        return Ok(value);
    }

    let invalid = || CalcError::InvalidNumericInput(trimmed.to_string());
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.contains("inf") || lowered.contains("nan") {
        return Err(invalid());
    }

    // Well-formed but outside what `Decimal` parses directly.
    let float: f64 = trimmed.parse().map_err(|_| invalid())?;
    if float.is_infinite() {
        return Err(CalcError::Overflow);
    }
    if float.abs() < SMALLEST_MAGNITUDE {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64(float).ok_or(CalcError::Overflow)
}

/// Parses an operator answer. Only the line terminator is stripped, so
/// `" +"` is not an operator.
pub fn parse_operator(text: &str) -> Result<Operator> {
    text.trim_end_matches(['\r', '\n']).parse()
}
