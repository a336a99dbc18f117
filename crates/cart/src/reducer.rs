//! The cart reducer.
//!
//! Every transition is total: absent ids and unknown action kinds leave the
//! state as it was. The input state is never modified; a new one is built.

use catalog::Product;
use common::ProductId;

use crate::action::CartAction;
use crate::line_item::CartLineItem;
use crate::state::CartState;

/// A state that evolves by folding actions.
///
/// `reduce` must be pure and deterministic: the same state and action always
/// give the same new state, with no side effects and no failure path.
pub trait Reducer: Default + Clone {
    /// The actions this state understands.
    type Action;

    /// Returns the state that follows `self` under `action`.
    fn reduce(&self, action: &Self::Action) -> Self;

    /// Folds a sequence of actions, starting from `self`.
    fn reduce_all<'a, I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }
}

impl Reducer for CartState {
    type Action = CartAction;

    fn reduce(&self, action: &CartAction) -> Self {
        reduce(self, action)
    }
}

/// Computes the next cart state for one action.
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddToCart(product) => add_to_cart(state, product),
        CartAction::RemoveFromCart(id) => remove_from_cart(state, *id),
        CartAction::IncrementItem(id) => increment_item(state, *id),
        CartAction::DecrementItem(id) => decrement_item(state, *id),
        CartAction::Unrecognized { .. } => state.clone(),
    }
}

fn add_to_cart(state: &CartState, product: &Product) -> CartState {
    if state.is_in_cart(product.id) {
        return increment_item(state, product.id);
    }

    let mut items = state.items().to_vec();
    items.push(CartLineItem::new(product.clone()));
    CartState::from_items(items)
}

fn remove_from_cart(state: &CartState, id: ProductId) -> CartState {
    CartState::from_items(
        state
            .items()
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect(),
    )
}

fn increment_item(state: &CartState, id: ProductId) -> CartState {
    CartState::from_items(
        state
            .items()
            .iter()
            .map(|item| {
                if item.id() == id {
                    item.with_quantity(item.quantity.saturating_add(1))
                } else {
                    item.clone()
                }
            })
            .collect(),
    )
}

// A line at quantity 1 is left alone rather than removed; use
// RemoveFromCart to drop it.
fn decrement_item(state: &CartState, id: ProductId) -> CartState {
    CartState::from_items(
        state
            .items()
            .iter()
            .map(|item| {
                if item.id() == id && item.quantity > 1 {
                    item.with_quantity(item.quantity - 1)
                } else {
                    item.clone()
                }
            })
            .filter(|item| item.quantity > 0)
            .collect(),
    )
}
