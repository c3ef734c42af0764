use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumericInput(String),
    #[error("Division by zero is undefined")]
    DivisionByZero,
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(String),
    #[error("Value is out of range")]
    Overflow,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
