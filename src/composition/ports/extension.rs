//! Extension point invoked once against the composed root.

use super::CompositionRoot;
use std::sync::Arc;
use thiserror::Error;

/// Startup extension augmenting a fully composed root.
pub trait Extension: Send {
    /// Applies the extension to `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError`] when the extension cannot be applied;
    /// startup is aborted.
    fn accept(&self, root: &mut dyn CompositionRoot) -> Result<(), ExtensionError>;
}

/// Failure reported by an extension.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct ExtensionError(Arc<dyn std::error::Error + Send + Sync>);

impl ExtensionError {
    /// Wraps an extension failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Creates an extension failure from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(std::io::Error::other(message.into()))
    }
}

impl From<super::RootError> for ExtensionError {
    fn from(err: super::RootError) -> Self {
        Self::new(err)
    }
}
