//! Startup configuration errors shared by every bounded context.
//!
//! A [`ConfigurationError`] is always fatal to startup: it names the entry
//! that could not be resolved so the operator can correct the deployment.

use std::sync::Arc;
use thiserror::Error;

/// Errors raised while interpreting declared configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigurationError {
    /// No backend family is registered under the requested method.
    #[error("unsupported backend family: {0}")]
    UnknownBackendFamily(String),

    /// No extension is registered under the declared name.
    #[error("unresolved extension: {0}")]
    UnknownExtension(String),

    /// No composition root kind is registered under the requested name.
    #[error("unknown composition root kind: {0}")]
    UnknownRootKind(String),

    /// A capability name is empty after trimming.
    #[error("capability name must not be empty")]
    EmptyCapabilityName,

    /// A capability name contains characters outside `[A-Za-z0-9_.-]`.
    #[error(
        "capability name '{0}' contains invalid characters (only alphanumeric, '_', '-' and '.' allowed)"
    )]
    InvalidCapabilityName(String),

    /// A capability name exceeds the 100-character limit.
    #[error("capability name exceeds 100 character limit: {0}")]
    CapabilityNameTooLong(String),

    /// The same capability was declared more than once.
    #[error("capability declared more than once: {0}")]
    DuplicateCapability(String),

    /// A configuration document key is not a string.
    #[error("configuration keys must be strings, found {0}")]
    NonStringKey(String),

    /// The configuration document is not a mapping.
    #[error("configuration document must be a mapping, found {0}")]
    NotAMapping(String),

    /// An implication edge is malformed.
    #[error("invalid implication edge for '{implied}': {reason}")]
    InvalidEdge {
        /// Implied capability of the rejected edge.
        implied: String,
        /// Why the edge was rejected.
        reason: String,
    },

    /// A service unit rejected its capability settings.
    #[error("invalid settings for capability '{capability}': {source}")]
    InvalidUnitSettings {
        /// Capability whose unit failed to construct.
        capability: String,
        /// Underlying constructor failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The configuration file could not be read.
    #[error("unable to read configuration file {path}: {source}")]
    Unreadable {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The configuration document could not be parsed.
    #[error("unable to parse configuration: {0}")]
    Parse(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigurationError {
    /// Wraps a service unit constructor failure.
    pub fn invalid_unit_settings(
        capability: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidUnitSettings {
            capability: capability.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a configuration file read failure.
    pub fn unreadable(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a document parse failure.
    pub fn parse(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Parse(Arc::new(err))
    }
}
