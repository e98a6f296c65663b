//! Foundational error type.
//!
//! `tabex-writer` defines its own `ExportError` and wraps this enum as one
//! variant via `From`, so callers of the writer see a single error surface
//! while configuration code stays independent of any I/O types.

use thiserror::Error;

/// Errors raised by configuration, registration, and encoding primitives.
#[derive(Debug, Error)]
pub enum TabexError {
    #[error("invalid {what}: {detail}")]
    InvalidConfig { what: &'static str, detail: String },

    #[error("substitution for {0:?} is already registered")]
    DuplicateSubstitution(String),

    #[error("unknown encoding label {0:?}")]
    UnknownEncoding(String),

    #[error("value cannot be represented in {encoding}")]
    Unencodable { encoding: String },
}

/// Shorthand result type for tabex crates.
pub type TabexResult<T> = Result<T, TabexError>;
