//! Storefront error types.

use cart::ActionError;
use catalog::CatalogError;
use common::ProductId;
use thiserror::Error;

/// Errors surfaced to the user while handling input.
///
/// None of these end the session; only a catalog that fails to load at
/// startup is fatal.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The input line is not a command.
    #[error("Cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// The product id is not in the catalog.
    #[error("No product with id {0}")]
    UnknownProduct(ProductId),

    /// A raw action could not be decoded.
    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl StorefrontError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        StorefrontError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
