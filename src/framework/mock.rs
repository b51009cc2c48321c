//! # Mock Dispatcher & Testing Guide
//!
//! [`MockDispatcher`] implements [`Dispatch`] without a store: it records every
//! action it receives so tests can assert exactly what a thunk dispatched, and in
//! which order.
//!
//! ## When to use the mock vs a real store
//!
//! | Feature | MockDispatcher | Store |
//! |---------|----------------|-------|
//! | **State** | None, only the action log | Real reducers and state tree |
//! | **Ordering checks** | `expect` + `verify` | `history()` |
//! | **Use Case** | Testing thunk lifecycles and work units | Testing the wired application |
//!
//! ```rust
//! use resource_recipe::framework::mock::MockDispatcher;
//! use resource_recipe::framework::{Action, Dispatch};
//!
//! let mock = MockDispatcher::new();
//! mock.expect("app/example/LOADING");
//! mock.dispatch(Action::new("app/example/LOADING", None));
//! mock.verify();
//! ```

use crate::framework::action::Action;
use crate::framework::thunk::Dispatch;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Records dispatched actions and checks them against expected types.
#[derive(Clone, Default)]
pub struct MockDispatcher {
    received: Arc<Mutex<Vec<Action>>>,
    expectations: Arc<Mutex<VecDeque<String>>>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the type the next unmatched dispatch is expected to carry.
    pub fn expect(&self, kind: impl Into<String>) -> &Self {
        self.expectations.lock().unwrap().push_back(kind.into());
        self
    }

    /// Every action received so far, in order.
    pub fn actions(&self) -> Vec<Action> {
        self.received.lock().unwrap().clone()
    }

    /// The types of every action received so far, in order.
    pub fn kinds(&self) -> Vec<String> {
        self.received.lock().unwrap().iter().map(|a| a.kind.clone()).collect()
    }

    /// Verifies that the received types match the queued expectations exactly.
    ///
    /// # Panics
    ///
    /// Panics if any expectation was unmet or any extra action was dispatched.
    pub fn verify(&self) {
        let expected: Vec<String> = self.expectations.lock().unwrap().iter().cloned().collect();
        let received = self.kinds();
        assert_eq!(received, expected, "Dispatched actions did not match expectations");
    }
}

impl Dispatch for MockDispatcher {
    fn dispatch(&self, action: Action) {
        self.received.lock().unwrap().push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_in_order() {
        let mock = MockDispatcher::new();
        mock.dispatch(Action::new("A", None));
        mock.dispatch(Action::new("B", Some(json!(1))));
        assert_eq!(mock.kinds(), vec!["A", "B"]);
        assert_eq!(mock.actions()[1].payload, Some(json!(1)));
    }

    #[test]
    fn test_verify_passes_on_match() {
        let mock = MockDispatcher::new();
        mock.expect("A").expect("B");
        mock.dispatch(Action::new("A", None));
        mock.dispatch(Action::new("B", None));
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Dispatched actions did not match expectations")]
    fn test_verify_panics_on_mismatch() {
        let mock = MockDispatcher::new();
        mock.expect("A");
        mock.dispatch(Action::new("B", None));
        mock.verify();
    }
}
