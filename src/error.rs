// src/error.rs
//! Error types for qubit construction.

use thiserror::Error;

/// Errors produced by this crate.
///
/// Probability validation is the only fallible operation; gate application
/// and Bloch projection are total functions over their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    /// The inputs to [`Qubit::from_probabilities`](crate::Qubit::from_probabilities)
    /// were negative or did not sum to 1 within tolerance.
    #[error("invalid probabilities (p0={p0}, p1={p1}): both must be non-negative and sum to 1")]
    InvalidProbability { p0: f64, p1: f64 },
}
