//! Calculator API trait
//!
//! Contract trait for the calculator. Implementations are stateless, so a
//! single instance can be shared across threads as `Arc<dyn CalculatorClient>`.

use crate::error::CalculatorError;
use crate::models::Operation;

/// Calculator API trait
pub trait CalculatorClient: Send + Sync {
    /// Returns `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Returns `a - b`.
    fn subtract(&self, a: f64, b: f64) -> f64;

    /// Returns `a * b`.
    fn multiply(&self, a: f64, b: f64) -> f64;

    /// Returns `a / b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] if `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Returns the non-negative square root of `a`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::NegativeInput`] if `a` is negative.
    fn sqrt(&self, a: f64) -> Result<f64, CalculatorError>;

    /// Runs the call described by `op`.
    ///
    /// # Errors
    /// Propagates the error of the partial operation `op` names.
    fn evaluate(&self, op: &Operation) -> Result<f64, CalculatorError> {
        match *op {
            Operation::Add { a, b } => Ok(self.add(a, b)),
            Operation::Subtract { a, b } => Ok(self.subtract(a, b)),
            Operation::Multiply { a, b } => Ok(self.multiply(a, b)),
            Operation::Divide { a, b } => self.divide(a, b),
            Operation::Sqrt { a } => self.sqrt(a),
        }
    }
}
