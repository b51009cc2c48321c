//! # Reducer
//!
//! A [`Reducer`] is a snapshot of a resource's handler table. Reading
//! `Resource::reducer` builds a fresh one, so methods added later only show up in
//! reducers obtained afterwards.

use crate::framework::action::{Action, ActionMatcher};
use crate::framework::handlers::Handler;
use crate::framework::state::State;
use std::sync::Arc;

/// A pure `(state, action) -> state` function assembled from registered handlers.
#[derive(Clone)]
pub struct Reducer {
    initial: Arc<State>,
    entries: Arc<Vec<(ActionMatcher, Handler)>>,
}

impl Reducer {
    pub(crate) fn new(initial: State, entries: Vec<(ActionMatcher, Handler)>) -> Self {
        Self {
            initial: Arc::new(initial),
            entries: Arc::new(entries),
        }
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    /// Applies every handler whose matcher accepts `action.kind`, in registration order.
    /// `None` stands for "no state yet" and starts from the initial state.
    pub fn reduce(&self, state: Option<&State>, action: &Action) -> State {
        let mut next = state.unwrap_or(&self.initial).clone();
        for (matcher, handler) in self.entries.iter() {
            if matcher.matches(&action.kind) {
                next = handler(&next, action);
            }
        }
        next
    }

    /// Whether any registered handler responds to `kind`.
    pub fn handles(&self, kind: &str) -> bool {
        self.entries.iter().any(|(matcher, _)| matcher.matches(kind))
    }
}

impl std::fmt::Debug for Reducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reducer")
            .field("initial", &self.initial)
            .field("matchers", &self.entries.iter().map(|(m, _)| m).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::handlers::handler;
    use serde_json::json;

    fn counter() -> Reducer {
        let initial = State::from_value(json!({ "count": 0 })).unwrap();
        let bump = handler(|state: &State, _: &Action| {
            let count = state.get("count").and_then(|v| v.as_i64()).unwrap_or(0);
            state.with("count", json!(count + 1))
        });
        Reducer::new(
            initial,
            vec![
                (ActionMatcher::Single("BUMP".into()), bump.clone()),
                (
                    ActionMatcher::combine([
                        ActionMatcher::Single("BUMP".into()),
                        ActionMatcher::Single("ALSO".into()),
                    ]),
                    bump,
                ),
            ],
        )
    }

    #[test]
    fn test_unmatched_action_is_noop() {
        let reducer = counter();
        let state = reducer.initial_state().clone();
        assert_eq!(reducer.reduce(Some(&state), &Action::new("unknown", None)), state);
    }

    #[test]
    fn test_missing_state_starts_from_initial() {
        let reducer = counter();
        let next = reducer.reduce(None, &Action::new("ALSO", None));
        assert_eq!(next.get("count"), Some(&json!(1)));
    }

    #[test]
    fn test_all_matching_entries_apply_in_order() {
        let reducer = counter();
        let next = reducer.reduce(None, &Action::new("BUMP", None));
        assert_eq!(next.get("count"), Some(&json!(2)));
        assert!(reducer.handles("ALSO"));
        assert!(!reducer.handles("NOPE"));
    }
}
