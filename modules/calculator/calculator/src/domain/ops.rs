//! Pure arithmetic over `f64`.
//!
//! Every function is side-effect free and safe to call from any thread.

use calculator_sdk::CalculatorError;

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`. Signed zeros follow IEEE-754.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`.
///
/// # Errors
/// Returns [`CalculatorError::DivisionByZero`] if `b` is `0.0` or `-0.0`,
/// whatever the value of `a`.
pub fn divide(a: f64, b: f64) -> Result<f64, CalculatorError> {
    if b == 0.0 {
        return Err(CalculatorError::division_by_zero(a));
    }
    Ok(a / b)
}

/// Returns the non-negative square root of `a`.
///
/// # Errors
/// Returns [`CalculatorError::NegativeInput`] if `a < 0`.
pub fn sqrt(a: f64) -> Result<f64, CalculatorError> {
    if a < 0.0 {
        return Err(CalculatorError::negative_input(a));
    }
    Ok(a.sqrt())
}
