//! Application wiring helpers.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use tracing::*;
