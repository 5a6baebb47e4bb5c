//! Action values submitted to the store under test.

use crate::error::{Result, TapError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A state-transition request: a `type` discriminator plus an optional
/// payload of arbitrary shape.
///
/// Actions have no identity beyond structural equality. They are created by
/// caller-supplied callbacks (usually through [`crate::ActionCreators`]),
/// consumed immediately by dispatch, and never stored by this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Discriminator the application's reducer switches on.
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional payload. Omitted from the wire shape when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    /// Create an action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Create an action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// Decode an action produced on the page side.
    ///
    /// An object without a `type` field, or a non-object value, is a caller
    /// error and yields [`TapError::InvalidAction`].
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) if map.contains_key("type") => {
                serde_json::from_value(Value::Object(map))
                    .map_err(|e| TapError::InvalidAction(e.to_string()))
            }
            Value::Object(_) => Err(TapError::InvalidAction(
                "action object has no 'type' field".to_string(),
            )),
            other => Err(TapError::InvalidAction(format!(
                "expected an action object, got {}",
                other
            ))),
        }
    }

    /// The JSON wire shape of this action.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("type".to_string(), Value::String(self.kind.clone()));
        if let Some(payload) = &self.payload {
            map.insert("payload".to_string(), payload.clone());
        }
        Value::Object(map)
    }
}

/// Normalization seam for dispatch callbacks: a single action is treated as
/// a one-element sequence.
///
/// ```
/// use storetap_core::{Action, IntoActions};
///
/// let one = Action::new("reset").into_actions();
/// let many = vec![Action::new("reset")].into_actions();
/// assert_eq!(one, many);
/// ```
pub trait IntoActions {
    /// The sequence of actions to dispatch, in order.
    fn into_actions(self) -> Vec<Action>;
}

impl IntoActions for Action {
    fn into_actions(self) -> Vec<Action> {
        vec![self]
    }
}

impl IntoActions for Vec<Action> {
    fn into_actions(self) -> Vec<Action> {
        self
    }
}

impl<const N: usize> IntoActions for [Action; N] {
    fn into_actions(self) -> Vec<Action> {
        self.into()
    }
}
