//! # In-Memory Store
//!
//! Resources only produce reducers and actions; something still has to hold the
//! state and apply dispatched actions. [`Store`] is that collaborator in its
//! simplest form: it combines several reducers by key into one state tree, applies
//! every dispatched action to each of them, and keeps an ordered action history.
//!
//! ```rust
//! use resource_recipe::framework::{Resource, ResourceOptions};
//! use resource_recipe::store::Store;
//! use serde_json::json;
//!
//! let posts = Resource::new(ResourceOptions::new("blog", "posts")).unwrap();
//! let store = Store::builder().slice("posts", posts.reducer()).build();
//!
//! store.dispatch(posts.action("add").unwrap().with(json!({ "id": 1 })));
//! assert_eq!(store.slice("posts").unwrap().get("posts"), Some(&json!([{ "id": 1 }])));
//! ```

use crate::framework::{Action, Dispatch, Reducer, State};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Collects keyed reducers before the store is built.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    slices: Vec<(String, Reducer)>,
}

impl StoreBuilder {
    /// Mounts `reducer` under `key`. A later slice with the same key replaces the earlier one.
    pub fn slice(mut self, key: impl Into<String>, reducer: Reducer) -> Self {
        let key = key.into();
        self.slices.retain(|(existing, _)| *existing != key);
        self.slices.push((key, reducer));
        self
    }

    pub fn build(self) -> Store {
        let states = self
            .slices
            .iter()
            .map(|(key, reducer)| (key.clone(), reducer.initial_state().clone()))
            .collect();
        Store {
            slices: Arc::new(self.slices),
            inner: Arc::new(Mutex::new(Inner {
                states,
                history: Vec::new(),
            })),
        }
    }
}

#[derive(Debug)]
struct Inner {
    states: BTreeMap<String, State>,
    history: Vec<Action>,
}

/// A dispatch-capable store holding one state slice per mounted reducer.
///
/// Clones share the same state tree and history.
#[derive(Debug, Clone)]
pub struct Store {
    slices: Arc<Vec<(String, Reducer)>>,
    inner: Arc<Mutex<Inner>>,
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Applies `action` to every slice.
    pub fn dispatch(&self, action: Action) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, reducer) in self.slices.iter() {
            let next = reducer.reduce(inner.states.get(key), &action);
            inner.states.insert(key.clone(), next);
        }
        debug!(kind = %action.kind, dispatched = inner.history.len() + 1, "Dispatched");
        inner.history.push(action);
    }

    /// The whole state tree, one field per slice.
    pub fn state(&self) -> State {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let mut root = State::new();
        for (key, state) in &inner.states {
            root.insert(key.clone(), state.clone().into_value());
        }
        root
    }

    pub fn slice(&self, key: &str) -> Option<State> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.states.get(key).cloned()
    }

    /// Every action dispatched so far, in order.
    pub fn history(&self) -> Vec<Action> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.history.clone()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        Store::dispatch(self, action);
    }
}
