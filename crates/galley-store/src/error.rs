/// Errors from collection and store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A resource with this id is already in the collection.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// The numeric id space has no successor left.
    #[error("{0} id space exhausted")]
    IdSpaceExhausted(&'static str),

    /// A collection lock was poisoned by a panicking holder.
    #[error("{0} collection lock poisoned")]
    LockPoisoned(&'static str),

    /// The seed document could not be parsed.
    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    /// I/O error reading a seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
