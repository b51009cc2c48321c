//! Sample resources wired with the factory.

pub mod comment;

pub use comment::*;
