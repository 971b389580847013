//! Backend port implemented by every generation family.

use crate::generation::domain::{BackendCapabilities, BackendError, GenerationOptions};
use async_trait::async_trait;

/// Result type for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// Generation contract shared by all backend families.
///
/// Implementations are process-wide and may be called concurrently; they
/// are responsible for their own synchronisation. Families that cannot be
/// shared should implement [`SerialGenerationBackend`] and be wrapped by
/// the exclusive adapter instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Returns the constraints this backend can honour.
    fn capabilities(&self) -> BackendCapabilities;

    /// Generates one output per prompt, in prompt order.
    ///
    /// `max_length` bounds the size of each output. `options` are the
    /// caller's keyword options, forwarded unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] for any backend-internal failure, including
    /// malformed input and unsupported options.
    async fn generate(
        &self,
        prompts: Vec<String>,
        max_length: usize,
        options: &GenerationOptions,
    ) -> BackendResult<Vec<String>>;
}

/// Generation contract for backends that must not run concurrently.
#[async_trait]
pub trait SerialGenerationBackend: Send {
    /// Returns the constraints this backend can honour.
    fn capabilities(&self) -> BackendCapabilities;

    /// Generates one output per prompt with exclusive access to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] for any backend-internal failure.
    async fn generate(
        &mut self,
        prompts: Vec<String>,
        max_length: usize,
        options: &GenerationOptions,
    ) -> BackendResult<Vec<String>>;
}
