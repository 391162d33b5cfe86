//! Configuration for the calculator service.

use serde::Deserialize;

/// Configuration for the calculator service.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Emit a debug event for every successful call.
    /// Failed calls are always logged.
    /// Default: `true`
    pub trace_operations: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            trace_operations: true,
        }
    }
}
