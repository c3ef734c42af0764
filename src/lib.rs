pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logging;
