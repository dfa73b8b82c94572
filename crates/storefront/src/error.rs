//! Unified error handling for the storefront runtime.
//!
//! Nothing the visitor does can fail loudly: controllers recover from every
//! `AppError` by logging it and carrying on. The only error that reaches the
//! page is a configuration error at startup.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration was rejected at startup.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A value could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
