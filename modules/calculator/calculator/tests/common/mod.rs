#![allow(dead_code)]

//! Common test utilities for calculator integration tests

use std::sync::Arc;

use calculator::{CalculatorClient, Service};

/// Absolute tolerance for results that go through more than one rounding.
pub const TOLERANCE: f64 = 1e-9;

pub fn create_client() -> Arc<dyn CalculatorClient> {
    Arc::new(Service::new())
}

/// Relative comparison that falls back to absolute near zero.
pub fn approx_eq(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= TOLERANCE * scale
}
