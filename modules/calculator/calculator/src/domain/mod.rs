//! Domain layer for the calculator
//!
//! Contains the arithmetic and the service that exposes it.

pub mod ops;
pub mod service;

pub use service::Service;
