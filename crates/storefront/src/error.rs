//! Crate-level error type.
//!
//! Module errors convert into `StorefrontError` with `?`, so callers that
//! drive several modules (the CLI, the service bundle) return one type.

use thiserror::Error;

use crate::auth::AuthError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::persist::StorageError;

/// Storefront error type.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The storage medium failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An account operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// No product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Result alias for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
