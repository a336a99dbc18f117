//! Cart state and its derived values.

use common::{Money, ProductId};
use serde::Serialize;

use crate::line_item::CartLineItem;

/// The contents of the cart.
///
/// Line items are kept in the order their product was first added. Ids are
/// unique and every quantity is at least 1. The only way to get a non-empty
/// state is through [`crate::reduce`], which keeps both properties.
///
/// Totals are recomputed from the items on every call and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Returns the line item for a product, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns true iff a line item with this id exists.
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns the number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price × quantity over all line items.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }
}
