//! In-memory echo backend for tests and local wiring checks.

use crate::generation::{
    domain::{BackendCapabilities, BackendError, BackendOptions, GenerationOptions},
    ports::{BackendResult, GenerationBackend},
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Option key holding a prefix prepended to every echoed prompt.
pub const PREFIX_OPTION: &str = "prefix";

/// Deterministic backend that echoes each prompt, truncated to the
/// requested maximum length in characters.
///
/// The backend never loads a model. It is suitable for unit and behaviour
/// tests and for checking catalog wiring without native dependencies.
#[derive(Debug, Default)]
pub struct EchoBackend {
    prefix: String,
    capabilities: BackendCapabilities,
    calls: AtomicUsize,
}

impl EchoBackend {
    /// Creates an echo backend with no prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an echo backend configured from construction options.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the `prefix` option is not a string.
    pub fn from_options(options: &BackendOptions) -> BackendResult<Self> {
        let prefix = match options.get(PREFIX_OPTION) {
            None => String::new(),
            Some(value) => value
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| BackendError::message("echo prefix must be a string"))?,
        };
        Ok(Self {
            prefix,
            ..Self::default()
        })
    }

    /// Overrides the declared capabilities.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: BackendCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns the number of backend calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn echo(&self, prompt: &str, max_length: usize) -> String {
        format!("{}{prompt}", self.prefix)
            .chars()
            .take(max_length)
            .collect()
    }
}

#[async_trait]
impl GenerationBackend for EchoBackend {
    fn capabilities(&self) -> BackendCapabilities {
        self.capabilities
    }

    async fn generate(
        &self,
        prompts: Vec<String>,
        max_length: usize,
        options: &GenerationOptions,
    ) -> BackendResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(unknown) = options.as_map().keys().find(|key| *key != "uppercase") {
            return Err(BackendError::message(format!(
                "unsupported echo option: {unknown}"
            )));
        }
        let uppercase = options
            .get("uppercase")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        Ok(prompts
            .iter()
            .map(|prompt| {
                let echoed = self.echo(prompt, max_length);
                if uppercase {
                    echoed.to_uppercase()
                } else {
                    echoed
                }
            })
            .collect())
    }
}
