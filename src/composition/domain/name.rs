//! Validated capability name type.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a capability name.
const MAX_NAME_LENGTH: usize = 100;

/// Name of an optional feature of the composed service.
///
/// Capability names are configuration keys such as `embeddings`,
/// `similarity` or `translation`. They are matched exactly; surrounding
/// whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CapabilityName(String);

impl CapabilityName {
    /// Creates a validated capability name.
    ///
    /// Only characters in `[A-Za-z0-9_.-]` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyCapabilityName`] when the value is
    /// empty after trimming, [`ConfigurationError::CapabilityNameTooLong`]
    /// when it exceeds 100 characters, or
    /// [`ConfigurationError::InvalidCapabilityName`] for other characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyCapabilityName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(ConfigurationError::CapabilityNameTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !is_valid {
            return Err(ConfigurationError::InvalidCapabilityName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a name from a literal known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the capability name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CapabilityName {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CapabilityName> for String {
    fn from(value: CapabilityName) -> Self {
        value.0
    }
}

impl AsRef<str> for CapabilityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
