//! Backend family inference from identifier shape.

use super::{BackendIdentifier, BackendMethod};

/// File extension marking a locally stored GGUF artifact.
const GGUF_EXTENSION: &str = ".gguf";

/// Provider prefixes that route `provider/model` identifiers to a remote API.
///
/// Hub-style names such as `google/flan-t5-base` share the same shape, so
/// only these prefixes are treated as remote.
pub const REMOTE_PROVIDERS: &[&str] = &[
    "anthropic",
    "azure",
    "bedrock",
    "cohere",
    "deepseek",
    "gemini",
    "groq",
    "mistral",
    "ollama",
    "openai",
    "openrouter",
    "together_ai",
    "vertex_ai",
    "xai",
];

/// Infers the backend family for an identifier.
///
/// Total over all identifiers: GGUF paths select
/// [`BackendMethod::LlamaCpp`], `provider/model` routes with a known remote
/// provider select [`BackendMethod::LiteLlm`], and everything else selects
/// the default [`BackendMethod::Transformers`].
#[must_use]
pub fn infer(identifier: &BackendIdentifier) -> BackendMethod {
    let normalized = identifier.as_str().trim().to_ascii_lowercase();

    if normalized.ends_with(GGUF_EXTENSION) {
        return BackendMethod::LlamaCpp;
    }

    if is_remote_route(&normalized) {
        return BackendMethod::LiteLlm;
    }

    BackendMethod::default()
}

fn is_remote_route(normalized: &str) -> bool {
    let Some((provider, model)) = normalized.split_once('/') else {
        return false;
    };
    !model.trim().is_empty() && REMOTE_PROVIDERS.contains(&provider.trim())
}
