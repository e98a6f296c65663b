//! Error types for tabex-writer.

use thiserror::Error;

use tabex_core::TabexError;

/// Errors that can occur while configuring or emitting a document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Core(#[from] TabexError),

    #[error("destination not writable: {0}")]
    DestinationNotWritable(String),

    #[error("document is sealed; writes are no longer accepted")]
    DocumentSealed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
