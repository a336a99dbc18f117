//! Catalog grouped by display category.

use std::collections::HashSet;
use std::path::Path;

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// A display section of the catalog.
///
/// Categories have no identity beyond their label and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub products: Vec<Product>,
}

impl Category {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }
}

/// The full product catalog, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog, checking that product ids are unique and that
    /// prices and category names are well formed.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();

        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryName);
            }

            for product in &category.products {
                if product.price.is_negative() {
                    return Err(CatalogError::NegativePrice {
                        id: product.id,
                        price: product.price,
                    });
                }
                if !seen.insert(product.id) {
                    return Err(CatalogError::DuplicateProductId {
                        id: product.id,
                        category: category.name.clone(),
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    /// Returns the built-in nursery catalog.
    pub fn nursery() -> Self {
        Self {
            categories: crate::nursery::categories(),
        }
    }

    /// Parses a catalog from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            products = catalog.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Returns the categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns every product in display order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().find(|p| p.id == id)
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }

    /// Returns true if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::nursery()
    }
}
