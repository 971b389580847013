//! Single-caller admission gate for backends that cannot be shared.

use crate::generation::{
    domain::{BackendCapabilities, GenerationOptions},
    ports::{BackendResult, GenerationBackend, SerialGenerationBackend},
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Adapts a [`SerialGenerationBackend`] to the shared backend port.
///
/// Concurrent callers queue on an async mutex, so at most one generation
/// call reaches the wrapped backend at a time.
#[derive(Debug)]
pub struct ExclusiveBackend<B> {
    capabilities: BackendCapabilities,
    inner: Mutex<B>,
}

impl<B: SerialGenerationBackend> ExclusiveBackend<B> {
    /// Wraps `backend`, capturing its declared capabilities.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            capabilities: backend.capabilities(),
            inner: Mutex::new(backend),
        }
    }
}

#[async_trait]
impl<B: SerialGenerationBackend + 'static> GenerationBackend for ExclusiveBackend<B> {
    fn capabilities(&self) -> BackendCapabilities {
        self.capabilities
    }

    async fn generate(
        &self,
        prompts: Vec<String>,
        max_length: usize,
        options: &GenerationOptions,
    ) -> BackendResult<Vec<String>> {
        let mut backend = self.inner.lock().await;
        backend.generate(prompts, max_length, options).await
    }
}
