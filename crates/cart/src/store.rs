//! Cart store: owns the current state and records dispatched actions.

use crate::action::CartAction;
use crate::reducer::Reducer;
use crate::state::CartState;

/// Holder of the current cart state.
///
/// Each [`dispatch`](CartStore::dispatch) runs the reducer to completion and
/// replaces the state wholesale. Dispatched actions are appended to a log so
/// the state can be rebuilt with [`CartStore::replay`].
///
/// The log grows by one entry on every dispatch, including no-ops and
/// unrecognized actions, and is never cleared. A long-lived store holds every
/// action it has seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    state: CartState,
    actions: Vec<CartAction>,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store by dispatching `actions` in order from an empty cart.
    pub fn replay(actions: impl IntoIterator<Item = CartAction>) -> Self {
        let mut store = Self::new();
        for action in actions {
            store.apply(action);
        }
        store
    }

    /// Applies an action and returns the new state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let kind = action.kind();
        let product_id = action.product_id();

        if let CartAction::Unrecognized { kind: raw } = &action {
            tracing::warn!(kind = %raw, "ignoring unrecognized cart action");
        }

        self.apply(action);

        tracing::debug!(
            kind,
            product_id = ?product_id,
            lines = self.state.line_count(),
            total_items = self.state.total_items(),
            total_price = %self.state.total_price(),
            "cart action dispatched"
        );
        metrics::counter!("cart_actions_total", "kind" => kind).increment(1);
        metrics::gauge!("cart_line_items").set(self.state.line_count() as f64);

        &self.state
    }

    fn apply(&mut self, action: CartAction) {
        self.state = self.state.reduce(&action);
        self.actions.push(action);
    }

    /// Returns the current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Returns every action dispatched so far, oldest first, no-ops included.
    pub fn actions(&self) -> &[CartAction] {
        &self.actions
    }
}
