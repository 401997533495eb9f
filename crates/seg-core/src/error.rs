//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `SegError` as one
//! variant via `From`.

use thiserror::Error;

/// The top-level error type for `seg-core`.
#[derive(Debug, Error)]
pub enum SegError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `seg-core`.
pub type SegResult<T> = Result<T, SegError>;
