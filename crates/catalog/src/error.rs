//! Catalog error types.

use common::{Money, ProductId};
use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON or has the wrong shape.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same product ID appears more than once.
    #[error("Duplicate product id {id} (in category {category:?})")]
    DuplicateProductId { id: ProductId, category: String },

    /// A product has a negative price.
    #[error("Product {id} has negative price {price}")]
    NegativePrice { id: ProductId, price: Money },

    /// A category has an empty or blank name.
    #[error("Category name must not be empty")]
    EmptyCategoryName,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
