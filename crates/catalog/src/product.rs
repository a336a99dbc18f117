//! Catalog product entry.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product offered by the store.
///
/// Products are immutable once the catalog is built. The cart copies their
/// fields into line items by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier across the catalog.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price, written as integer cents.
    #[serde(rename = "price_cents", with = "common::as_cents")]
    pub price: Money,

    /// URI of the display image.
    pub image: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}
