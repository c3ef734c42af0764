//! Pure calculation rules: the discount threshold and the operator dispatch.

pub mod arithmetic;
pub mod discount;
pub mod operator;
