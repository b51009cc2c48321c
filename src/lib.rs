#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Resource Recipe
//!
//! > **Reducers and action helpers for CRUD-like resources, without the boilerplate.**
//!
//! In an action/reducer architecture every entity (comments, posts, users, ...) needs
//! the same plumbing: a collection field, a current item, loading and error flags,
//! action types for each change, and async operations that toggle `loading` around
//! a request. This crate generates all of it from a scope and a name.
//!
//! ## 🚀 Core Concepts
//!
//! ### One factory per resource
//! [`Resource`](framework::Resource) derives everything from two strings:
//! - **Names**: `scope` and `name` are normalised (`"blog"`, `"comments"` → `blog`, `comment`),
//!   and every action type becomes `"<scope>/<name>/<CONSTANT_CASE>"`.
//! - **State**: `{ comments: [], comment: null, problem: null, loading: false, success: null }`,
//!   plus any fields you add.
//! - **Handlers**: nine pure transitions (`reset`, `loading`, `success`, `errored`, `set`,
//!   `replace`, `remove`, `add`, `current`), extensible with `add_method`.
//!
//! ### Thunks
//! Async work registered with `add_thunk` is wrapped so that `loading` is switched on
//! before the work runs and switched off exactly once afterwards. Failures are recorded
//! through `errored` before `loading` is cleared.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Pure Handlers
//! Handlers take `(&State, &Action)` and return a new `State`. The reducer returned by
//! `Resource::reducer` is a snapshot: it never changes after it was built.
//!
//! ### 2. Type-Safe Error Handling
//! Misuse (blank names, unknown action types) is reported through
//! [`ResourceError`](framework::ResourceError) at call time. Failures inside thunks never
//! surface as errors; they end up in state.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Factory ([`framework`])
//! - **Role**: Name derivation, handler tables, reducers and the thunk lifecycle.
//! - **Key items**: [`Resource`](framework::Resource), [`Reducer`](framework::Reducer), [`Thunk`](framework::Thunk).
//!
//! ### 2. The Store ([`store`])
//! - **Role**: Holds the state tree, combines reducers by key and accepts dispatches.
//! - **Key items**: [`Store`](store::Store).
//!
//! ### 3. The Implementation ([`domain`])
//! - **Role**: A sample `comment` resource with fetch thunks over an async API.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod domain;
pub mod framework;
pub mod lifecycle;
pub mod store;
