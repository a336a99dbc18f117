//! Cart actions and their wire form.

use catalog::Product;
use common::ProductId;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::ActionError;

pub const ADD_TO_CART: &str = "ADD_TO_CART";
pub const REMOVE_FROM_CART: &str = "REMOVE_FROM_CART";
pub const INCREMENT_ITEM: &str = "INCREMENT_ITEM";
pub const DECREMENT_ITEM: &str = "DECREMENT_ITEM";
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

/// A request to transition the cart.
///
/// On the wire an action is `{"type": KIND, "payload": ...}`. A `type` that
/// is none of the four known kinds decodes to [`CartAction::Unrecognized`],
/// which the reducer treats as the identity transition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ActionEnvelope")]
pub enum CartAction {
    /// Add one unit of a product, creating its line item if needed.
    AddToCart(Product),

    /// Drop the line item for a product.
    RemoveFromCart(ProductId),

    /// Add one unit to an existing line item.
    IncrementItem(ProductId),

    /// Take one unit from an existing line item, never below 1.
    DecrementItem(ProductId),

    /// An action kind this cart does not know.
    ///
    /// Decoding only produces this for tags outside the four known kinds.
    /// Build one with [`CartAction::unrecognized`]; a hand-built value whose
    /// `kind` is a known tag serializes without a payload and will not
    /// decode again.
    Unrecognized { kind: String },
}

impl CartAction {
    /// Returns the wire tag of this action.
    ///
    /// Unknown kinds all report [`UNRECOGNIZED`]; the original tag is kept
    /// in the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => ADD_TO_CART,
            CartAction::RemoveFromCart(_) => REMOVE_FROM_CART,
            CartAction::IncrementItem(_) => INCREMENT_ITEM,
            CartAction::DecrementItem(_) => DECREMENT_ITEM,
            CartAction::Unrecognized { .. } => UNRECOGNIZED,
        }
    }

    /// Returns the product id the action targets, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartAction::AddToCart(product) => Some(product.id),
            CartAction::RemoveFromCart(id)
            | CartAction::IncrementItem(id)
            | CartAction::DecrementItem(id) => Some(*id),
            CartAction::Unrecognized { .. } => None,
        }
    }

    /// Wraps an unknown action tag.
    ///
    /// Returns `None` when `kind` is one of the four known tags, since those
    /// always carry a payload.
    pub fn unrecognized(kind: impl Into<String>) -> Option<Self> {
        let kind = kind.into();
        match kind.as_str() {
            ADD_TO_CART | REMOVE_FROM_CART | INCREMENT_ITEM | DECREMENT_ITEM => None,
            _ => Some(CartAction::Unrecognized { kind }),
        }
    }

    /// Decodes an action from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let envelope: ActionEnvelope = serde_json::from_str(json)?;
        Self::try_from(envelope)
    }
}

/// `{"type": ..., "payload": ...}` as it travels between view and store.
#[derive(Debug, Clone, Deserialize)]
struct ActionEnvelope {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default)]
    payload: Value,
}

// Borrowed outgoing form; the payload is serialized in place so its errors
// reach the caller's serializer.
#[derive(Serialize)]
struct OutgoingEnvelope<'a, P> {
    #[serde(rename = "type")]
    kind: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<P>,
}

#[derive(Serialize, Deserialize)]
struct IdPayload {
    id: ProductId,
}

fn decode<T: for<'de> Deserialize<'de>>(kind: &'static str, payload: Value) -> Result<T, ActionError> {
    if payload.is_null() {
        return Err(ActionError::MissingPayload { kind });
    }
    serde_json::from_value(payload).map_err(|source| ActionError::InvalidPayload { kind, source })
}

fn decode_id(kind: &'static str, payload: Value) -> Result<ProductId, ActionError> {
    decode::<IdPayload>(kind, payload).map(|p| p.id)
}

impl TryFrom<ActionEnvelope> for CartAction {
    type Error = ActionError;

    fn try_from(envelope: ActionEnvelope) -> Result<Self, Self::Error> {
        let ActionEnvelope { kind, payload } = envelope;
        match kind.as_str() {
            ADD_TO_CART => decode(ADD_TO_CART, payload).map(CartAction::AddToCart),
            REMOVE_FROM_CART => decode_id(REMOVE_FROM_CART, payload).map(CartAction::RemoveFromCart),
            INCREMENT_ITEM => decode_id(INCREMENT_ITEM, payload).map(CartAction::IncrementItem),
            DECREMENT_ITEM => decode_id(DECREMENT_ITEM, payload).map(CartAction::DecrementItem),
            _ => Ok(CartAction::Unrecognized { kind }),
        }
    }
}

impl Serialize for CartAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        match self {
            CartAction::AddToCart(product) => OutgoingEnvelope {
                kind,
                payload: Some(product),
            }
            .serialize(serializer),
            CartAction::RemoveFromCart(id)
            | CartAction::IncrementItem(id)
            | CartAction::DecrementItem(id) => OutgoingEnvelope {
                kind,
                payload: Some(IdPayload { id: *id }),
            }
            .serialize(serializer),
            CartAction::Unrecognized { kind } => OutgoingEnvelope {
                kind: kind.as_str(),
                payload: None::<()>,
            }
            .serialize(serializer),
        }
    }
}
