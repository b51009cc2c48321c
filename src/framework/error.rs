//! # Resource Errors
//!
//! This module defines the error type shared by every part of the resource factory.
//! Both variants are raised synchronously and signal a usage mistake by the caller:
//! they are never retried.

/// Errors that can occur while building or querying a [`Resource`](crate::framework::Resource).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// A required parameter was missing, empty, or of the wrong shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An action or thunk was requested that the resource never registered.
    #[error("{0}")]
    NotFound(String),
}

impl ResourceError {
    pub(crate) fn invalid(parameter: &str, method: &str, expected: &str) -> Self {
        ResourceError::InvalidArgument(format!(
            "Parameter \"{parameter}\" must be given to {method} as {expected}."
        ))
    }
}
