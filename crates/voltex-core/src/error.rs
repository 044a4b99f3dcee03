//! Error types for voltex.

use thiserror::Error;

/// The main error type for voltex operations.
#[derive(Error, Debug)]
pub enum VoltexError {
    /// The inspected slot has no asset assigned.
    #[error("no volume assigned to the preview slot")]
    EmptyReference,

    /// The inspected asset is not a volume.
    #[error("preview can only be used with volume assets, got '{0}'")]
    WrongAssetType(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A volume was constructed with a zero-sized dimension.
    #[error("volume dimensions must be non-zero, got {0}x{1}x{2}")]
    ZeroDimension(u32, u32, u32),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for voltex operations.
pub type Result<T> = std::result::Result<T, VoltexError>;
