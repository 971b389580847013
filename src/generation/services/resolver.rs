//! Backend resolution service.
//!
//! Provides [`BackendResolver`], which selects a backend family for an
//! identifier (inferring it when no method is given) and constructs a fresh
//! backend through the family's catalog entry.

use crate::error::ConfigurationError;
use crate::generation::{
    adapters::BackendCatalog,
    domain::{
        BackendIdentifier, BackendMethod, BackendOptions, BackendUnavailableError, infer,
    },
    ports::GenerationBackend,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors returned while resolving a backend.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The requested family is not registered.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The family's constructor failed.
    #[error(transparent)]
    Unavailable(#[from] BackendUnavailableError),
}

/// Result type for backend resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// A constructed backend together with how it was selected.
#[derive(Clone)]
pub struct BackendHandle {
    identifier: BackendIdentifier,
    family: BackendMethod,
    backend: Arc<dyn GenerationBackend>,
}

impl BackendHandle {
    /// Returns the identifier the backend was constructed for.
    #[must_use]
    pub const fn identifier(&self) -> &BackendIdentifier {
        &self.identifier
    }

    /// Returns the family that constructed the backend.
    #[must_use]
    pub const fn family(&self) -> &BackendMethod {
        &self.family
    }

    /// Returns the constructed backend.
    #[must_use]
    pub fn backend(&self) -> &dyn GenerationBackend {
        self.backend.as_ref()
    }
}

impl fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendHandle")
            .field("identifier", &self.identifier)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Maps an identifier and optional method to a freshly constructed backend.
#[derive(Debug, Clone)]
pub struct BackendResolver {
    catalog: Arc<BackendCatalog>,
}

impl BackendResolver {
    /// Creates a resolver over the given backend catalog.
    #[must_use]
    pub const fn new(catalog: Arc<BackendCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolves and constructs a backend.
    ///
    /// When `method` is `None` the family is inferred from `identifier`.
    /// Every call constructs a new backend; hold on to the returned handle
    /// to reuse it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Configuration`] when the family is not
    /// registered, or [`ResolveError::Unavailable`] when the family's
    /// constructor fails. A failing family never falls back to another.
    pub fn resolve(
        &self,
        identifier: &BackendIdentifier,
        method: Option<BackendMethod>,
        options: &BackendOptions,
    ) -> ResolveResult<BackendHandle> {
        let inferred = method.is_none();
        let family = method.unwrap_or_else(|| infer(identifier));
        debug!(%identifier, %family, inferred, "resolving generation backend");

        let constructor = self
            .catalog
            .get(&family)
            .ok_or_else(|| ConfigurationError::UnknownBackendFamily(family.to_string()))?;

        let backend = constructor(identifier, options)
            .map_err(|err| BackendUnavailableError::new(family.clone(), err))?;
        info!(%identifier, %family, "constructed generation backend");

        Ok(BackendHandle {
            identifier: identifier.clone(),
            family,
            backend,
        })
    }
}
