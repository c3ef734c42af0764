use crate::domain::arithmetic::evaluate;
use crate::domain::discount::{DiscountPercent, Price, quote};
use crate::error::{CalcError, Result};
use crate::interfaces::input::{parse_number, parse_operator};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::debug;

const PRICE_PROMPT: &str = "Enter the original price of the item: ";
const PERCENT_PROMPT: &str = "Enter the discount percentage: ";
const DISCOUNT_INPUT_ERROR: &str =
    "Invalid input. Please enter numeric values for price and discount percentage.";

const FIRST_NUMBER_PROMPT: &str = "Enter the first number: ";
const SECOND_NUMBER_PROMPT: &str = "Enter the second number: ";
const OPERATOR_PROMPT: &str = "Enter the operation (+, -, *, /): ";
const NUMBER_INPUT_ERROR: &str = "Invalid input. Please enter numeric values.";
const OPERATOR_ERROR: &str = "Invalid operation. Please use +, -, *, or /.";
const DIVISION_BY_ZERO_ERROR: &str = "Error: Division by zero is undefined.";
const OVERFLOW_ERROR: &str = "Error: The result is out of range.";
const NUMBER_RANGE_ERROR: &str = "Error: The number is out of range.";

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A result was printed.
    Completed,
    /// The input was rejected and an error message was printed.
    Rejected,
}

/// A numeric answer after any error message has been printed.
enum Answer {
    Value(Decimal),
    Rejected,
    /// End of input; nothing was printed.
    Exhausted,
}

/// Prompt/answer channel over any line-based input and writable output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a newline and reads one line.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Asks for a number. Out-of-range answers get their own message;
    /// anything else that fails to parse gets `invalid_message`.
    fn ask_number(&mut self, prompt: &str, invalid_message: &str) -> Result<Answer> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(Answer::Exhausted);
        };
        match parse_number(&line) {
            Ok(value) => Ok(Answer::Value(value)),
            Err(CalcError::Overflow) => {
                self.say(NUMBER_RANGE_ERROR)?;
                Ok(Answer::Rejected)
            }
            Err(_) => {
                self.say(invalid_message)?;
                Ok(Answer::Rejected)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs the discount flow: price, then percentage, then the final price.
///
/// Non-numeric or out-of-range input (or end of input) prints an error and
/// stops right away; the second prompt is not shown when the first answer is
/// invalid.
pub fn run_discount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SessionOutcome> {
    let mut answers = [Decimal::ZERO; 2];
    for (slot, prompt) in answers.iter_mut().zip([PRICE_PROMPT, PERCENT_PROMPT]) {
        match console.ask_number(prompt, DISCOUNT_INPUT_ERROR)? {
            Answer::Value(value) => *slot = value,
            Answer::Rejected => return Ok(SessionOutcome::Rejected),
            Answer::Exhausted => {
                console.say(DISCOUNT_INPUT_ERROR)?;
                return Ok(SessionOutcome::Rejected);
            }
        }
    }
    let [price, percent] = answers;

    let q = quote(Price::new(price), DiscountPercent::new(percent));
    if q.discounted() {
        console.say(format!(
            "The final price after applying the discount is: {}",
            q.final_price
        ))?;
    } else {
        console.say(format!("No discount applied. The final price is: {}", q.original))?;
    }
    Ok(SessionOutcome::Completed)
}

/// Runs one calculator round.
pub fn run_calculator<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SessionOutcome> {
    match calculator_round(console)? {
        Some(outcome) => Ok(outcome),
        None => {
            console.say(NUMBER_INPUT_ERROR)?;
            Ok(SessionOutcome::Rejected)
        }
    }
}

/// Runs calculator rounds until the input is exhausted.
///
/// Returns the outcome of every round. A round that hits end of input after
/// its first answer still counts as rejected.
///
/// A rejected answer ends its round, and the next line read is the first
/// number of a new round, matching the prompt the user sees next. Answers
/// typed ahead for the rejected round are therefore read as new-round input.
pub fn run_calculator_repl<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<SessionOutcome>> {
    let mut outcomes = Vec::new();
    while let Some(outcome) = calculator_round(console)? {
        outcomes.push(outcome);
    }
    debug!(rounds = outcomes.len(), "calculator input exhausted");
    Ok(outcomes)
}

/// `None` means the input ended before the first number was given.
fn calculator_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<SessionOutcome>> {
    let a = match console.ask_number(FIRST_NUMBER_PROMPT, NUMBER_INPUT_ERROR)? {
        Answer::Value(a) => a,
        Answer::Rejected => return Ok(Some(SessionOutcome::Rejected)),
        Answer::Exhausted => return Ok(None),
    };
    let b = match console.ask_number(SECOND_NUMBER_PROMPT, NUMBER_INPUT_ERROR)? {
        Answer::Value(b) => b,
        Answer::Rejected => return Ok(Some(SessionOutcome::Rejected)),
        Answer::Exhausted => {
            console.say(NUMBER_INPUT_ERROR)?;
            return Ok(Some(SessionOutcome::Rejected));
        }
    };

    let Some(symbol) = console.ask(OPERATOR_PROMPT)? else {
        console.say(NUMBER_INPUT_ERROR)?;
        return Ok(Some(SessionOutcome::Rejected));
    };

    let evaluated = parse_operator(&symbol)
        .and_then(|operator| evaluate(a, b, operator).map(|result| (operator, result)));
    let outcome = match evaluated {
        Ok((operator, result)) => {
            console.say(format!(
                "{} {} {} = {}",
                a.normalize(),
                operator,
                b.normalize(),
                result.normalize()
            ))?;
            SessionOutcome::Completed
        }
        Err(CalcError::InvalidOperator(_)) => {
            console.say(OPERATOR_ERROR)?;
            SessionOutcome::Rejected
        }
        Err(CalcError::DivisionByZero) => {
            console.say(DIVISION_BY_ZERO_ERROR)?;
            SessionOutcome::Rejected
        }
        Err(CalcError::Overflow) => {
            console.say(OVERFLOW_ERROR)?;
            SessionOutcome::Rejected
        }
        Err(e) => return Err(e),
    };
    Ok(Some(outcome))
}
