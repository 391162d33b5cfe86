//! Error types for the calculator.

use thiserror::Error;

/// Errors returned by the partial calculator operations.
///
/// Both kinds are recoverable: the caller decides whether to retry with
/// different operands or abort the surrounding computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// `divide` was called with a zero divisor.
    #[error("division by zero: cannot divide {dividend} by zero")]
    DivisionByZero {
        /// The left-hand operand of the rejected division.
        dividend: f64,
    },

    /// `sqrt` was called with a negative operand.
    #[error("negative input: cannot take the square root of {operand}")]
    NegativeInput {
        /// The rejected operand.
        operand: f64,
    },
}

impl CalculatorError {
    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub fn division_by_zero(dividend: f64) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// Creates a `NegativeInput` error.
    #[must_use]
    pub fn negative_input(operand: f64) -> Self {
        Self::NegativeInput { operand }
    }

    /// Returns `true` if this is a `DivisionByZero` error.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns `true` if this is a `NegativeInput` error.
    #[must_use]
    pub fn is_negative_input(&self) -> bool {
        matches!(self, Self::NegativeInput { .. })
    }

    /// The operand that caused the failure.
    #[must_use]
    pub fn operand(&self) -> f64 {
        match self {
            Self::DivisionByZero { dividend } => *dividend,
            Self::NegativeInput { operand } => *operand,
        }
    }
}
