//! Error types for metacommand parsing and dispatch.

use thiserror::Error;

/// Errors surfaced by the metacommand core.
#[derive(Debug, Error)]
pub enum MetaError {
    /// A token inside a parenthesized format-option list lacked a
    /// `key=value` shape.
    ///
    /// Pairs scanned before the offending token remain stored; nothing is
    /// rolled back.
    #[error("invalid format option")]
    InvalidFormatOption,

    /// A failure from the injected decoder or a dispatch adapter, carried
    /// unchanged and never reclassified.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A specialized `Result` type for metacommand operations.
pub type Result<T> = std::result::Result<T, MetaError>;
