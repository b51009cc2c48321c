//! # Actions and Matchers
//!
//! An [`Action`] is the plain `{ type, payload }` value dispatched to a store.
//! Handlers are registered under an [`ActionMatcher`]: either one localised type,
//! or a set of types that all route to the same handler.
//!
//! Callers describe the type(s) of a new handler with a [`MethodType`], using short
//! (unlocalised) names. The resource localises them into a matcher on registration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// A request for a state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    /// `None` means the caller supplied no payload; handlers substitute their own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    pub fn new(kind: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// The payload, or `default` when none was supplied.
    pub fn payload_or(&self, default: Value) -> Value {
        self.payload.clone().unwrap_or(default)
    }
}

/// The key a handler is registered under.
///
/// `Any` holds a set, so two combined matchers listing the same types in a
/// different order are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionMatcher {
    Single(String),
    Any(BTreeSet<String>),
}

impl ActionMatcher {
    /// Combines fully-qualified types into one matcher. Nested `Any` matchers are flattened
    /// and a single distinct type collapses to [`ActionMatcher::Single`].
    pub fn combine(matchers: impl IntoIterator<Item = ActionMatcher>) -> Self {
        let mut types = BTreeSet::new();
        for matcher in matchers {
            match matcher {
                ActionMatcher::Single(kind) => {
                    types.insert(kind);
                }
                ActionMatcher::Any(set) => types.extend(set),
            }
        }
        if types.len() == 1 {
            if let Some(kind) = types.pop_first() {
                return ActionMatcher::Single(kind);
            }
        }
        ActionMatcher::Any(types)
    }

    pub fn matches(&self, kind: &str) -> bool {
        match self {
            ActionMatcher::Single(single) => single == kind,
            ActionMatcher::Any(set) => set.contains(kind),
        }
    }

    pub fn types(&self) -> Vec<&str> {
        match self {
            ActionMatcher::Single(kind) => vec![kind.as_str()],
            ActionMatcher::Any(set) => set.iter().map(String::as_str).collect(),
        }
    }
}

impl std::fmt::Display for ActionMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.types().join("||"))
    }
}

/// One entry of a combined [`MethodType`].
#[derive(Debug, Clone, PartialEq)]
pub enum MatcherPart {
    /// A short type name, localised on registration.
    Type(String),
    /// An already combined (and localised) matcher, used as-is.
    Matcher(ActionMatcher),
}

impl From<&str> for MatcherPart {
    fn from(kind: &str) -> Self {
        MatcherPart::Type(kind.to_string())
    }
}

impl From<String> for MatcherPart {
    fn from(kind: String) -> Self {
        MatcherPart::Type(kind)
    }
}

impl From<ActionMatcher> for MatcherPart {
    fn from(matcher: ActionMatcher) -> Self {
        MatcherPart::Matcher(matcher)
    }
}

/// The type(s) a handler passed to `add_method` responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodType {
    Single(String),
    Combined(Vec<MatcherPart>),
}

impl From<&str> for MethodType {
    fn from(kind: &str) -> Self {
        MethodType::Single(kind.to_string())
    }
}

impl From<String> for MethodType {
    fn from(kind: String) -> Self {
        MethodType::Single(kind)
    }
}

impl<T: Into<MatcherPart>> From<Vec<T>> for MethodType {
    fn from(parts: Vec<T>) -> Self {
        MethodType::Combined(parts.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MatcherPart>, const N: usize> From<[T; N]> for MethodType {
    fn from(parts: [T; N]) -> Self {
        MethodType::Combined(parts.into_iter().map(Into::into).collect())
    }
}

/// Produces actions of one localised type. Returned by `Resource::action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCreator {
    kind: String,
}

impl ActionCreator {
    pub(crate) fn new(kind: String) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Creates the action without a payload, so the handler applies its default.
    pub fn create(&self) -> Action {
        Action::new(self.kind.clone(), None)
    }

    /// Creates the action carrying `payload`.
    pub fn with(&self, payload: Value) -> Action {
        Action::new(self.kind.clone(), Some(payload))
    }
}
