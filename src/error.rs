//! Error type for the configuration surface.
//!
//! Cleaning itself is total and never fails; only loading a
//! [`PlaceholderMap`](crate::PlaceholderMap) from JSON can.

use crate::placeholder::Category;

/// Errors produced while building cleaner configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The placeholder JSON was malformed or named an unknown category.
    #[error("invalid placeholder map: {0}")]
    Config(#[from] serde_json::Error),

    /// A marker was empty or whitespace-only.
    #[error("marker for category `{0}` must contain a non-whitespace character")]
    EmptyMarker(Category),

    /// A marker would be altered by the cleaning steps that run after it is
    /// inserted.
    #[error("marker for category `{0}` is altered by later cleaning steps")]
    UnstableMarker(Category),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
