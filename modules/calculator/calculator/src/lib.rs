#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Calculator
//!
//! Stateless arithmetic over `f64`: addition, subtraction, multiplication,
//! division and square root. Division by zero and the square root of a
//! negative number are reported as [`CalculatorError`] values.
//!
//! ## Architecture
//!
//! - `domain/ops.rs` - Pure arithmetic functions
//! - `domain/service.rs` - `CalculatorClient` implementation with logging
//! - `config.rs` - Service configuration

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;

pub use calculator_sdk::{CalculatorClient, CalculatorError, Operation};
pub use config::CalculatorConfig;
pub use domain::Service;
pub use domain::ops::{add, divide, multiply, sqrt, subtract};
