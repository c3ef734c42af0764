//! Application layer wiring the calculation rules to their two front ends.
//!
//! `session` drives the interactive prompt flows over any reader/writer pair;
//! `batch` evaluates CSV requests row by row and never aborts on a bad row.

pub mod batch;
pub mod session;
