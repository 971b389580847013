//! Backend family catalog.

use super::ExclusiveBackend;
use crate::catalog::Catalog;
use crate::generation::{
    domain::{BackendIdentifier, BackendMethod, BackendOptions},
    ports::{BackendResult, GenerationBackend, SerialGenerationBackend},
};
use std::sync::Arc;

/// Constructor building a shared backend from an identifier and options.
pub type BackendConstructor = Box<
    dyn Fn(&BackendIdentifier, &BackendOptions) -> BackendResult<Arc<dyn GenerationBackend>>
        + Send
        + Sync,
>;

/// Registry of backend constructors keyed by family tag.
#[derive(Debug, Default)]
pub struct BackendCatalog {
    entries: Catalog<BackendConstructor>,
}

impl BackendCatalog {
    /// Creates an empty backend catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a family whose backends are safe for concurrent use.
    ///
    /// A later registration for the same family replaces the earlier one.
    pub fn register<F>(&mut self, family: &BackendMethod, constructor: F) -> &mut Self
    where
        F: Fn(&BackendIdentifier, &BackendOptions) -> BackendResult<Arc<dyn GenerationBackend>>
            + Send
            + Sync
            + 'static,
    {
        self.entries.register(family.as_str(), Box::new(constructor));
        self
    }

    /// Registers a family whose backends must serve one caller at a time.
    ///
    /// Each constructed backend is wrapped in an [`ExclusiveBackend`] that
    /// admits a single call at a time.
    pub fn register_exclusive<B, F>(&mut self, family: &BackendMethod, constructor: F) -> &mut Self
    where
        B: SerialGenerationBackend + 'static,
        F: Fn(&BackendIdentifier, &BackendOptions) -> BackendResult<B> + Send + Sync + 'static,
    {
        self.register(family, move |identifier, options| {
            let backend = constructor(identifier, options)?;
            Ok(Arc::new(ExclusiveBackend::new(backend)) as Arc<dyn GenerationBackend>)
        })
    }

    /// Looks up the constructor for `family`.
    #[must_use]
    pub fn get(&self, family: &BackendMethod) -> Option<&BackendConstructor> {
        self.entries.get(family.as_str())
    }

    /// Returns the registered family tags in lexical order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.entries.names()
    }
}
