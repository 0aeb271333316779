// File: src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    /// Empty dictionary, zero count, a date that cannot be seeded, or a
    /// category with no usable word.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Propagated I/O error from the cache or a dictionary file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file could not be encoded or decoded.
    #[error("encode error: {0}")]
    Encode(#[from] bincode::Error),

    /// Malformed dictionary file or export failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
