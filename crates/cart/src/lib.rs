//! Cart store for the storefront.
//!
//! This crate provides:
//! - [`CartState`], an ordered list of [`CartLineItem`]s with derived totals
//! - [`CartAction`], the four cart transitions plus a catch-all for unknown wire input
//! - [`reduce`], the pure `(state, action) -> state` transition function
//! - [`CartStore`], the state holder that dispatches actions and keeps an action log

pub mod action;
pub mod error;
pub mod line_item;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::CartAction;
pub use error::ActionError;
pub use line_item::CartLineItem;
pub use reducer::{Reducer, reduce};
pub use state::CartState;
pub use store::CartStore;
