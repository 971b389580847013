//! Backend resource identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier used when no model location is supplied.
pub const DEFAULT_IDENTIFIER: &str = "google/flan-t5-base";

/// Model or resource location naming what a backend should load.
///
/// Identifiers are caller-supplied and immutable. They may be hub-style
/// names (`google/flan-t5-base`), filesystem paths (`/models/q4.gguf`), or
/// remote API routes (`openai/gpt-4o`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendIdentifier(String);

impl BackendIdentifier {
    /// Creates an identifier from the supplied location.
    ///
    /// Surrounding whitespace is removed. A blank location is replaced by
    /// [`DEFAULT_IDENTIFIER`].
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_owned())
    }

    /// Creates an identifier from an optional location, falling back to
    /// [`DEFAULT_IDENTIFIER`].
    #[must_use]
    pub fn or_default(value: Option<&str>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BackendIdentifier {
    fn default() -> Self {
        Self(DEFAULT_IDENTIFIER.to_owned())
    }
}

impl AsRef<str> for BackendIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BackendIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
