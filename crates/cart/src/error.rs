//! Cart error types.

use thiserror::Error;

/// Errors decoding a cart action from its wire form.
///
/// Applying an action never fails; only decoding can.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A known action kind arrived without its payload.
    #[error("Action {kind} requires a payload")]
    MissingPayload { kind: &'static str },

    /// A known action kind arrived with a payload of the wrong shape.
    #[error("Invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The action text is not a JSON action envelope.
    #[error("Malformed action: {0}")]
    Malformed(#[from] serde_json::Error),
}
