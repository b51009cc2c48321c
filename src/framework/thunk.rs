//! # Thunks
//!
//! A thunk is an asynchronous unit of work registered on a resource. Invoking it
//! through [`Thunk::call`] wraps the work in the standard lifecycle:
//!
//! 1. dispatch `loading(true)`
//! 2. await the work, which may dispatch its own actions through the [`ThunkContext`]
//! 3. on success dispatch `loading(false)`
//! 4. on failure dispatch `errored(problem)` and then `loading(false)`
//!
//! `loading(false)` is dispatched exactly once per call, and on failure always after
//! `errored`. Failures end up in state; they are never returned as an `Err`.
//!
//! ```rust
//! use resource_recipe::framework::{mock::MockDispatcher, Resource, ResourceOptions, ThunkContext};
//! use serde_json::{json, Value};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut resource = Resource::new(ResourceOptions::new("app", "example")).unwrap();
//!     resource
//!         .add_thunk("fetch", |_args: Vec<Value>, ctx: ThunkContext| async move {
//!             ctx.dispatch("set", Some(json!([{ "id": 1 }])))?;
//!             Ok::<(), Value>(())
//!         })
//!         .unwrap();
//!
//!     let dispatcher = Arc::new(MockDispatcher::new());
//!     resource.thunk("fetch").unwrap().call(dispatcher.clone(), vec![]).await;
//!     assert_eq!(
//!         dispatcher.kinds(),
//!         vec!["app/example/LOADING", "app/example/SET", "app/example/LOADING"]
//!     );
//! }
//! ```

use crate::framework::action::Action;
use crate::framework::error::ResourceError;
use crate::framework::resource::Resource;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Anything that accepts dispatched actions: a store, or a recorder in tests.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

/// Wraps any displayable error as a `{ "message": ... }` problem payload.
pub fn problem(err: impl Display) -> Value {
    json!({ "message": err.to_string() })
}

impl From<ResourceError> for Value {
    fn from(err: ResourceError) -> Self {
        problem(err)
    }
}

/// An asynchronous work unit registered with `Resource::add_thunk`.
///
/// Closures of the form `|args: Vec<Value>, ctx: ThunkContext| async move { ... }`
/// implement this trait directly. The error value becomes the `errored` payload.
/// Async blocks that use `?` need their result type spelled out, e.g. `Ok::<(), Value>(())`.
#[async_trait]
pub trait Work: Send + Sync {
    async fn run(&self, args: Vec<Value>, ctx: ThunkContext) -> Result<(), Value>;
}

#[async_trait]
impl<F, Fut> Work for F
where
    F: Fn(Vec<Value>, ThunkContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), Value>> + Send + 'static,
{
    async fn run(&self, args: Vec<Value>, ctx: ThunkContext) -> Result<(), Value> {
        (self)(args, ctx).await
    }
}

/// What a work unit receives: the resource it belongs to and a way to dispatch.
#[derive(Clone)]
pub struct ThunkContext {
    resource: Resource,
    dispatcher: Arc<dyn Dispatch>,
}

impl ThunkContext {
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Dispatches one of the resource's own actions by short type name.
    pub fn dispatch(&self, kind: &str, payload: Option<Value>) -> Result<(), ResourceError> {
        let action = Action::new(self.resource.action(kind)?.kind(), payload);
        self.dispatch_action(action);
        Ok(())
    }

    /// Dispatches an arbitrary action, e.g. one created by another resource.
    pub fn dispatch_action(&self, action: Action) {
        debug!(kind = %action.kind, "Dispatch from thunk");
        self.dispatcher.dispatch(action);
    }
}

/// How a thunk invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ThunkOutcome {
    Completed,
    /// The work failed; the value was dispatched as the `errored` payload.
    Failed(Value),
}

impl ThunkOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ThunkOutcome::Completed)
    }
}

/// A registered work unit wrapped in the loading/error lifecycle. Returned by `Resource::thunk`.
#[derive(Clone)]
pub struct Thunk {
    kind: String,
    loading: String,
    errored: String,
    work: Arc<dyn Work>,
    resource: Resource,
}

impl Thunk {
    pub(crate) fn new(kind: String, loading: String, errored: String, work: Arc<dyn Work>, resource: Resource) -> Self {
        Self {
            kind,
            loading,
            errored,
            work,
            resource,
        }
    }

    /// The localised key the work was registered under.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Runs the work with `args`, dispatching lifecycle actions to `dispatcher`.
    ///
    /// `loading(false)` is dispatched when the call ends, also if the work panics or the
    /// returned future is dropped before completion. Panics still propagate.
    #[instrument(skip(self, dispatcher, args), fields(thunk = %self.kind))]
    pub async fn call(&self, dispatcher: Arc<dyn Dispatch>, args: Vec<Value>) -> ThunkOutcome {
        dispatcher.dispatch(Action::new(self.loading.clone(), Some(Value::Bool(true))));
        let loading_off = LoadingOff {
            kind: self.loading.clone(),
            dispatcher: dispatcher.clone(),
        };

        let ctx = ThunkContext {
            resource: self.resource.clone(),
            dispatcher: dispatcher.clone(),
        };
        let outcome = match self.work.run(args, ctx).await {
            Ok(()) => {
                debug!("Work completed");
                ThunkOutcome::Completed
            }
            Err(problem) => {
                warn!(%problem, "Work failed");
                dispatcher.dispatch(Action::new(self.errored.clone(), Some(problem.clone())));
                ThunkOutcome::Failed(problem)
            }
        };

        drop(loading_off);
        outcome
    }
}

/// Dispatches `loading(false)` when dropped, whichever way the call ends.
struct LoadingOff {
    kind: String,
    dispatcher: Arc<dyn Dispatch>,
}

impl Drop for LoadingOff {
    fn drop(&mut self) {
        if std::thread::panicking() {
            warn!(kind = %self.kind, "Work panicked, clearing loading");
        }
        self.dispatcher
            .dispatch(Action::new(std::mem::take(&mut self.kind), Some(Value::Bool(false))));
    }
}

impl std::fmt::Debug for Thunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thunk").field("kind", &self.kind).finish()
    }
}
