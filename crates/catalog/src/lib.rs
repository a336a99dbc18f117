//! Product catalog for the storefront.
//!
//! The catalog is static configuration: it is built once at startup, either
//! from the built-in nursery listing or from a JSON file, and never mutated.
//! The cart does not read or validate it.

pub mod catalog;
pub mod error;
mod nursery;
pub mod product;

pub use catalog::{Catalog, Category};
pub use error::{CatalogError, Result};
pub use product::Product;
