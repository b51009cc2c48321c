//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for
//! binaries built on this crate. Log levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Resource construction**: scope and normalised name (`info`)
//! - **Registration**: every `add_method` / `add_thunk` key (`debug`)
//! - **Thunks**: a span per invocation carrying the thunk key, failures at `warn`
//! - **Store**: every dispatched action type (`debug`)
//!
//! ```bash
//! # Construction and thunk failures only
//! RUST_LOG=info cargo run
//!
//! # Every registration and dispatch
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Resource created scope="blog" name="comment"
//! DEBUG Method registered matcher=blog/comment/SET_PAGE
//! DEBUG call{thunk=blog/comment/FETCH_ALL}: Dispatch from thunk kind=blog/comment/SET
//! DEBUG Dispatched kind=blog/comment/LOADING dispatched=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; the action type identifies the resource
        .compact()
        .init();
}
