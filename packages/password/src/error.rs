//! Error handling for password hashing and verification

use thiserror::Error;

/// Password-specific errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Password was empty when hashing
    #[error("Password should not be empty")]
    InvalidPassword,

    /// Encoded hash record could not be decoded
    #[error("Malformed hash record: {0}")]
    MalformedHash(String),

    /// Stored iteration count differs from the configured one
    #[error("Iteration count mismatch: expected {expected}, got {actual}")]
    IterationMismatch {
        /// Configured iteration count
        expected: u32,
        /// Iteration count embedded in the stored record
        actual: u32,
    },

    /// Hashing parameters failed validation
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Secure random source failed
    #[error("Random number generation failed: {0}")]
    RandomGeneration(String),

    /// Key derivation provider failed
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Blocking worker task could not be joined
    #[error("Task execution failed: {0}")]
    Task(String),
}

impl PasswordError {
    /// Create a `MalformedHash` error
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedHash(msg.into())
    }

    /// Create an `InvalidParameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Whether the error describes a structurally invalid stored record
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedHash(_))
    }
}

/// Result type for password operations
pub type Result<T> = std::result::Result<T, PasswordError>;
