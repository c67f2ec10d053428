use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown order status: {0}")]
    UnknownStatus(String),

    #[error("payload field '{field}' cannot be stored: {reason}")]
    Unmaterializable { field: String, reason: String },
}
