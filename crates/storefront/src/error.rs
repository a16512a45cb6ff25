//! Unified error handling.
//!
//! Invalid user input never reaches this type: it is reported to the user
//! through a notification and the operation returns normally. What remains
//! are faults the caller has to deal with.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing the cart to storage failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The order link could not be built.
    #[error("Invalid order link: {0}")]
    OrderLink(#[from] url::ParseError),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
