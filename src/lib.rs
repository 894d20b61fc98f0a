//! Paired "violation" and "obeying" demos of the SOLID principles and the
//! Builder pattern.
//!
//! Every scenario writes to a caller-supplied `std::io::Write`, so the same
//! code drives the console binary and the tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod scenarios;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use runner::Runner;
pub use scenarios::Scenario;
