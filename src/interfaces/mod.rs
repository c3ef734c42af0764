//! Boundary code: text parsing for interactive input and CSV/JSON batch I/O.

pub mod csv;
pub mod input;
