//! Backend family selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend family implementing the generation contract.
///
/// The three well-known families cover local hub models, local GGUF
/// artifacts, and remote API routes. Any other tag names a custom family
/// that must be registered in the backend catalog before it can be
/// resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BackendMethod {
    /// Local models loaded through a tensor runtime. The default family.
    #[default]
    Transformers,
    /// Local GGUF artifacts served by a native inference library.
    LlamaCpp,
    /// Remote API models reached through a provider-routing client.
    LiteLlm,
    /// A caller-registered family.
    Custom(String),
}

impl BackendMethod {
    /// Canonical tag of [`BackendMethod::Transformers`].
    pub const TRANSFORMERS: &'static str = "transformers";
    /// Canonical tag of [`BackendMethod::LlamaCpp`].
    pub const LLAMA_CPP: &'static str = "llama.cpp";
    /// Canonical tag of [`BackendMethod::LiteLlm`].
    pub const LITELLM: &'static str = "litellm";

    /// Parses an explicit method tag.
    ///
    /// Returns `None` for blank input so callers fall back to inference.
    /// Well-known tags are matched exactly; anything else becomes
    /// [`BackendMethod::Custom`].
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::from(trimmed.to_owned()))
    }

    /// Returns the canonical tag used as the catalog key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Transformers => Self::TRANSFORMERS,
            Self::LlamaCpp => Self::LLAMA_CPP,
            Self::LiteLlm => Self::LITELLM,
            Self::Custom(tag) => tag,
        }
    }
}

impl From<String> for BackendMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::TRANSFORMERS => Self::Transformers,
            Self::LLAMA_CPP => Self::LlamaCpp,
            Self::LITELLM => Self::LiteLlm,
            _ => Self::Custom(value),
        }
    }
}

impl From<BackendMethod> for String {
    fn from(value: BackendMethod) -> Self {
        match value {
            BackendMethod::Custom(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for BackendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
