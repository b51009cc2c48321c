//! # Default Handlers
//!
//! Every resource starts with the same nine state transitions. Each one is pure:
//! it reads `(state, action)` and returns a new [`State`] without touching the input.
//!
//! | type | effect |
//! |------|--------|
//! | `reset` | fresh copy of the initial state |
//! | `loading` | sets `loading`; turning it on clears `problem` and `success` |
//! | `success` | sets `success` (default `{"status": true}`) |
//! | `errored` | sets `problem` (default `null`) |
//! | `set` | replaces the collection (default `[]`) |
//! | `replace` | swaps the collection item with the payload's `id` |
//! | `remove` | drops the collection item whose `id` equals the payload |
//! | `add` | appends the payload to the collection |
//! | `current` | sets the single-item field (default `null`) |

use crate::framework::action::Action;
use crate::framework::state::State;
use serde_json::{json, Value};
use std::sync::Arc;

/// A pure state transition.
pub type Handler = Arc<dyn Fn(&State, &Action) -> State + Send + Sync>;

/// Wraps a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&State, &Action) -> State + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The short type names of the default handlers, in registration order.
pub const DEFAULT_TYPES: [&str; 9] = [
    "reset", "loading", "success", "errored", "set", "replace", "remove", "add", "current",
];

/// Builds the default handlers for a resource whose collection lives in `many_name`
/// and whose current item lives in `single_name`.
pub fn defaults(many_name: &str, single_name: &str, initial: &State) -> Vec<(&'static str, Handler)> {
    let initial = initial.clone();
    let many = many_name.to_string();
    let single = single_name.to_string();

    let reset = handler(move |_, _| initial.clone());

    // Starting new work clears stale results; finishing keeps them for display.
    let loading = handler(|state, action| {
        let on = action.payload_or(Value::Bool(true));
        let starting = is_truthy(&on);
        let mut next = state.with("loading", on);
        if starting {
            next.insert("problem", Value::Null);
            next.insert("success", Value::Null);
        }
        next
    });

    let success = handler(|state, action| state.with("success", action.payload_or(json!({ "status": true }))));

    let errored = handler(|state, action| state.with("problem", action.payload_or(Value::Null)));

    let set = {
        let many = many.clone();
        handler(move |state, action| state.with(&many, action.payload_or(json!([]))))
    };

    let replace = {
        let many = many.clone();
        handler(move |state, action| {
            let payload = action.payload_or(json!({}));
            let items = state
                .collection(&many)
                .iter()
                .map(|item| {
                    if id_eq(item.get("id"), payload.get("id")) {
                        payload.clone()
                    } else {
                        item.clone()
                    }
                })
                .collect();
            state.with(&many, Value::Array(items))
        })
    };

    let remove = {
        let many = many.clone();
        handler(move |state, action| {
            let id = action.payload_or(Value::Null);
            let items = state
                .collection(&many)
                .iter()
                .filter(|item| !id_eq(item.get("id"), Some(&id)))
                .cloned()
                .collect();
            state.with(&many, Value::Array(items))
        })
    };

    let add = handler(move |state, action| {
        let mut items = state.collection(&many).to_vec();
        items.push(action.payload_or(Value::Null));
        state.with(&many, Value::Array(items))
    });

    let current = handler(move |state, action| state.with(&single, action.payload_or(Value::Null)));

    vec![
        ("reset", reset),
        ("loading", loading),
        ("success", success),
        ("errored", errored),
        ("set", set),
        ("replace", replace),
        ("remove", remove),
        ("add", add),
        ("current", current),
    ]
}

/// Strict id equality where `1` and `1.0` are the same number.
fn id_eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// JavaScript-style truthiness, used to read the `loading` flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> State {
        State::from_value(json!({
            "items": [],
            "item": null,
            "problem": null,
            "loading": false,
            "success": null,
        }))
        .unwrap()
    }

    fn run(name: &str, state: &State, payload: Option<Value>) -> State {
        let table = defaults("items", "item", &initial());
        let (_, handler) = table.into_iter().find(|(n, _)| *n == name).unwrap();
        handler(state, &Action::new("ignored", payload))
    }

    #[test]
    fn test_defaults_cover_every_type() {
        let table = defaults("items", "item", &initial());
        let names: Vec<_> = table.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, DEFAULT_TYPES);
    }

    #[test]
    fn test_loading_on_clears_results() {
        let state = initial()
            .with("problem", json!("boom"))
            .with("success", json!({ "status": true }));
        let next = run("loading", &state, None);
        assert!(next.is_loading());
        assert_eq!(next.problem(), &Value::Null);
        assert_eq!(next.success(), &Value::Null);
    }

    #[test]
    fn test_loading_off_keeps_results() {
        let state = initial()
            .with("loading", json!(true))
            .with("problem", json!("boom"))
            .with("success", json!({ "status": true }));
        let next = run("loading", &state, Some(json!(false)));
        assert!(!next.is_loading());
        assert_eq!(next.problem(), &json!("boom"));
        assert_eq!(next.success(), &json!({ "status": true }));
    }

    #[test]
    fn test_success_and_errored_defaults() {
        let next = run("success", &initial(), None);
        assert_eq!(next.success(), &json!({ "status": true }));
        let next = run("errored", &initial().with("problem", json!("x")), None);
        assert_eq!(next.problem(), &Value::Null);
    }

    #[test]
    fn test_collection_handlers() {
        let state = run("set", &initial(), Some(json!([{ "id": 1, "v": "a" }, { "id": 2, "v": "b" }])));
        let state = run("add", &state, Some(json!({ "id": 3, "v": "c" })));
        assert_eq!(state.collection("items").len(), 3);

        let state = run("replace", &state, Some(json!({ "id": 2, "v": "B" })));
        assert_eq!(
            state.get("items"),
            Some(&json!([{ "id": 1, "v": "a" }, { "id": 2, "v": "B" }, { "id": 3, "v": "c" }]))
        );

        let state = run("remove", &state, Some(json!(1)));
        assert_eq!(
            state.get("items"),
            Some(&json!([{ "id": 2, "v": "B" }, { "id": 3, "v": "c" }]))
        );
    }

    #[test]
    fn test_float_ids_match_integer_ids() {
        let state = run("set", &initial(), Some(json!([{ "id": 1 }, { "id": 2 }])));
        let state = run("replace", &state, Some(json!({ "id": 2.0, "x": true })));
        assert_eq!(state.get("items"), Some(&json!([{ "id": 1 }, { "id": 2.0, "x": true }])));
        let state = run("remove", &state, Some(json!(1.0)));
        assert_eq!(state.get("items"), Some(&json!([{ "id": 2.0, "x": true }])));
    }

    #[test]
    fn test_set_defaults_to_empty() {
        let state = initial().with("items", json!([1, 2]));
        let next = run("set", &state, None);
        assert_eq!(next.get("items"), Some(&json!([])));
    }

    #[test]
    fn test_current_sets_single_item() {
        let next = run("current", &initial(), Some(json!({ "id": 9 })));
        assert_eq!(next.get("item"), Some(&json!({ "id": 9 })));
    }

    #[test]
    fn test_reset_ignores_prior_state() {
        let state = initial().with("items", json!([1])).with("loading", json!(true));
        assert_eq!(run("reset", &state, None), initial());
    }

    #[test]
    fn test_handlers_do_not_mutate_input() {
        let state = initial().with("items", json!([{ "id": 1 }]));
        let before = state.clone();
        let _ = run("remove", &state, Some(json!(1)));
        let _ = run("add", &state, Some(json!({ "id": 2 })));
        assert_eq!(state, before);
    }
}
