//! Resource factory: name derivation, handler tables, reducers and thunks.
//!
//! # Main Components
//!
//! - [`Resource`] - The factory; owns the handler and thunk tables
//! - [`Reducer`] - Snapshot of the handler table as a pure `(state, action) -> state` function
//! - [`Thunk`] - A registered work unit wrapped in the loading/error lifecycle
//! - [`ResourceError`] - `InvalidArgument` and `NotFound`
//!
//! # Testing
//!
//! See the [`mock`] module for a dispatcher that records actions instead of reducing them.

pub mod action;
pub mod error;
pub mod handlers;
pub mod mock;
pub mod naming;
pub mod reducer;
pub mod resource;
pub mod state;
pub mod thunk;

// Re-export core types for convenience
pub use action::{Action, ActionCreator, ActionMatcher, MatcherPart, MethodType};
pub use error::ResourceError;
pub use handlers::{handler, Handler};
pub use naming::{plural, singular, Names};
pub use reducer::Reducer;
pub use resource::Resource;
pub use state::{ResourceOptions, State};
pub use thunk::{problem, Dispatch, Thunk, ThunkContext, ThunkOutcome, Work};
