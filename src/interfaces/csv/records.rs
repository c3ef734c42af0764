use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a discount batch: `price,discount_percent`.
///
/// Fields are kept as text so that a non-numeric cell is reported on its own
/// row instead of failing the read.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct DiscountRequest {
    pub price: String,
    pub discount_percent: String,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct DiscountRecord {
    pub price: String,
    pub discount_percent: String,
    pub final_price: Option<Decimal>,
    pub discounted: Option<bool>,
    pub error: Option<String>,
}

/// One row of an arithmetic batch: `a,b,operator`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OperationRequest {
    pub a: String,
    pub b: String,
    pub operator: String,
}

/// Exactly one of `result` and `error` is set.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OperationRecord {
    pub a: String,
    pub b: String,
    pub operator: String,
    pub result: Option<Decimal>,
    pub error: Option<String>,
}
