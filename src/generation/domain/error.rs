//! Error types for backend resolution and generation.

use super::BackendMethod;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a backend implementation.
///
/// Backend errors are opaque to this crate and pass through the facade
/// unchanged.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct BackendError(Arc<dyn std::error::Error + Send + Sync>);

impl BackendError {
    /// Wraps a backend failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Creates a backend failure from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(std::io::Error::other(message.into()))
    }
}

/// A backend family could not be constructed.
#[derive(Debug, Clone, Error)]
#[error("backend family {family} is unavailable: {source}")]
pub struct BackendUnavailableError {
    family: BackendMethod,
    source: BackendError,
}

impl BackendUnavailableError {
    /// Creates the error for `family` with its root cause.
    #[must_use]
    pub const fn new(family: BackendMethod, source: BackendError) -> Self {
        Self { family, source }
    }

    /// Returns the family whose construction failed.
    #[must_use]
    pub const fn family(&self) -> &BackendMethod {
        &self.family
    }
}

/// A backend cannot honour a requested call-time constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("backend family {family} cannot honour {constraint}")]
pub struct CapabilityMismatchError {
    family: BackendMethod,
    constraint: String,
}

impl CapabilityMismatchError {
    /// Creates the error for `family` and the rejected `constraint`.
    #[must_use]
    pub fn new(family: BackendMethod, constraint: impl Into<String>) -> Self {
        Self {
            family,
            constraint: constraint.into(),
        }
    }

    /// Returns the family that rejected the constraint.
    #[must_use]
    pub const fn family(&self) -> &BackendMethod {
        &self.family
    }

    /// Returns the rejected constraint.
    #[must_use]
    pub fn constraint(&self) -> &str {
        &self.constraint
    }
}

/// Errors returned by the generation call surface.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The resolved backend cannot honour a requested constraint.
    #[error(transparent)]
    CapabilityMismatch(#[from] CapabilityMismatchError),

    /// The backend returned a different number of outputs than prompts.
    #[error("backend family {family} returned {actual} outputs for {expected} prompts")]
    OutputShapeMismatch {
        /// Family that produced the output.
        family: BackendMethod,
        /// Number of prompts submitted.
        expected: usize,
        /// Number of outputs received.
        actual: usize,
    },

    /// The backend failed while generating.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for generation calls.
pub type GenerationResult<T> = Result<T, GenerationError>;
