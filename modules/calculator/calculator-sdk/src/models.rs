//! Calculator request model.

use serde::{Deserialize, Serialize};

/// A single calculator call described as data.
///
/// Serialized internally tagged by `op`, e.g. `{"op":"divide","a":16.0,"b":-8.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// `a + b`.
    Add {
        /// Left operand.
        a: f64,
        /// Right operand.
        b: f64,
    },
    /// `a - b`.
    Subtract {
        /// Minuend.
        a: f64,
        /// Subtrahend.
        b: f64,
    },
    /// `a * b`.
    Multiply {
        /// Left operand.
        a: f64,
        /// Right operand.
        b: f64,
    },
    /// `a / b`, rejected when `b` is zero.
    Divide {
        /// Dividend.
        a: f64,
        /// Divisor.
        b: f64,
    },
    /// Square root of `a`, rejected when `a` is negative.
    Sqrt {
        /// Radicand.
        a: f64,
    },
}

impl Operation {
    /// The wire tag of this operation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Subtract { .. } => "subtract",
            Self::Multiply { .. } => "multiply",
            Self::Divide { .. } => "divide",
            Self::Sqrt { .. } => "sqrt",
        }
    }

    /// Whether this operation can fail for some operands.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Divide { .. } | Self::Sqrt { .. })
    }
}
