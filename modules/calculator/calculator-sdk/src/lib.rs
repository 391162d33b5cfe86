#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Calculator SDK
//!
//! This crate provides the public contract of the calculator:
//! - [`CalculatorClient`] - API trait for consumers
//! - [`Operation`] - serializable description of a single call
//! - [`CalculatorError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operation};
//!
//! let quotient = client.divide(16.0, -8.0)?;
//! let root = client.evaluate(&Operation::Sqrt { a: 64.0 })?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::CalculatorClient;
pub use error::CalculatorError;
pub use models::Operation;
