//! Domain service for the calculator
//!
//! Wraps the pure functions from [`super::ops`] behind the
//! [`CalculatorClient`] contract and reports each call through `tracing`.

use calculator_sdk::{CalculatorClient, CalculatorError, Operation};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::domain::ops;

/// Domain service that performs calculator operations.
///
/// Stateless apart from its configuration, so it can be cloned freely or
/// shared behind an `Arc<dyn CalculatorClient>`.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with the given configuration.
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn completed(&self, op: &Operation, result: f64) -> f64 {
        if !self.config.trace_operations {
            return result;
        }
        let operation = op.name();
        match *op {
            Operation::Sqrt { a } => {
                debug!(operation, a, result, "calculator operation completed");
            }
            Operation::Add { a, b }
            | Operation::Subtract { a, b }
            | Operation::Multiply { a, b }
            | Operation::Divide { a, b } => {
                debug!(operation, a, b, result, "calculator operation completed");
            }
        }
        result
    }

    fn checked(
        &self,
        op: &Operation,
        outcome: Result<f64, CalculatorError>,
    ) -> Result<f64, CalculatorError> {
        match outcome {
            Ok(result) => Ok(self.completed(op, result)),
            Err(err) => {
                debug!(
                    operation = op.name(),
                    error = %err,
                    "calculator operation rejected"
                );
                Err(err)
            }
        }
    }
}

impl CalculatorClient for Service {
    fn add(&self, a: f64, b: f64) -> f64 {
        self.completed(&Operation::Add { a, b }, ops::add(a, b))
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.completed(&Operation::Subtract { a, b }, ops::subtract(a, b))
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.completed(&Operation::Multiply { a, b }, ops::multiply(a, b))
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.checked(&Operation::Divide { a, b }, ops::divide(a, b))
    }

    fn sqrt(&self, a: f64) -> Result<f64, CalculatorError> {
        self.checked(&Operation::Sqrt { a }, ops::sqrt(a))
    }
}
