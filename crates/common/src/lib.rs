//! Shared value types used across the storefront crates.

mod money;
mod types;

pub use money::{Money, as_cents};
pub use types::{ProductId, SessionId};
