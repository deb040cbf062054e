//! Error handling for the ledger simulator
//!
//! Invalid transactions are never reported through these types: admission
//! filtering drops them silently, and balance or validity queries always
//! return a value. Only infrastructure failures (serialization, the system
//! clock, an exhausted mining iteration cap) surface as errors.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Clone)]
pub enum LedgerError {
    /// Serialization/deserialization errors
    Serialization(String),
    /// System clock errors
    Time(String),
    /// Mining errors (iteration cap exhausted)
    Mining(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LedgerError::Time(msg) => write!(f, "Time error: {msg}"),
            LedgerError::Mining(msg) => write!(f, "Mining error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<bincode::error::EncodeError> for LedgerError {
    fn from(err: bincode::error::EncodeError) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for LedgerError {
    fn from(err: bincode::error::DecodeError) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
