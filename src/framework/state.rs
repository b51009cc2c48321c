//! # Resource State
//!
//! State handled by a resource reducer is a string-keyed JSON object. The field
//! names depend on the resource (`comments`, `comment`, ...) so the shape cannot be
//! a fixed struct; [`State`] wraps a [`serde_json::Map`] and offers the few
//! accessors the default handlers need.
//!
//! [`ResourceOptions`] is the constructor configuration and can be deserialised
//! from JSON, which lets applications declare their resources as data.

use crate::framework::error::ResourceError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A string-keyed state object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(Map<String, Value>);

impl State {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds a state from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, ResourceError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ResourceError::invalid("state", "Resource::new", "an object")),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns a copy of `self` with `field` set to `value`. The receiver is left untouched.
    pub fn with(&self, field: &str, value: Value) -> Self {
        let mut next = self.clone();
        next.0.insert(field.to_string(), value);
        next
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// The items of a collection field. Missing or non-array fields read as empty.
    pub fn collection(&self, field: &str) -> &[Value] {
        match self.0.get(field) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// Copies every field of `overrides` over `self`.
    pub fn merge(&mut self, overrides: State) {
        self.0.extend(overrides.0);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.0.get("loading"), Some(Value::Bool(true)))
    }

    pub fn problem(&self) -> &Value {
        self.0.get("problem").unwrap_or(&Value::Null)
    }

    pub fn success(&self) -> &Value {
        self.0.get("success").unwrap_or(&Value::Null)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for State {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Configuration for [`Resource::new`](crate::framework::Resource::new).
///
/// ```rust
/// use resource_recipe::framework::ResourceOptions;
///
/// let options: ResourceOptions = serde_json::from_str(
///     r#"{ "scope": "blog", "name": "comments", "state": { "page": 1 } }"#,
/// ).unwrap();
/// assert_eq!(options.name, "comments");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceOptions {
    pub scope: String,
    pub name: String,
    /// Fields merged over the default initial state. Must be an object; `null` means none.
    #[serde(default)]
    pub state: Value,
}

impl ResourceOptions {
    pub fn new(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            name: name.into(),
            state: Value::Null,
        }
    }

    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }
}
