//! Cart line item.

use catalog::Product;
use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the cart together with how many units of it were picked.
///
/// While a line item exists its quantity is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// The product fields, copied verbatim at the first add.
    #[serde(flatten)]
    pub product: Product,

    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLineItem {
    /// Creates a line item with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Returns the product id, which is the line item's identity.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.product.price
    }

    /// Returns price × quantity for this line.
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }

    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            product: self.product.clone(),
            quantity,
        }
    }
}
