//! Core error types.

use thiserror::Error;

/// Errors from sampling with an untyped (signed) question count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The requested number of questions was below zero.
    #[error("question count must not be negative, got {0}")]
    NegativeCount(i64),
}
