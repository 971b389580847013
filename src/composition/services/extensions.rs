//! Startup extension runner.

use crate::composition::{
    adapters::{ExtensionCatalog, ExtensionConstructor},
    ports::{CompositionRoot, ExtensionError},
};
use crate::error::ConfigurationError;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for extension runs.
#[derive(Debug, Clone, Error)]
pub enum ExtensionRunError {
    /// A declared extension is not registered.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// An extension failed while being applied.
    #[error("extension {name} failed: {source}")]
    ExtensionFailed {
        /// Name of the failing extension.
        name: String,
        /// Failure reported by the extension.
        source: ExtensionError,
    },
}

/// Result type for extension runs.
pub type ExtensionRunResult<T> = Result<T, ExtensionRunError>;

/// Applies named startup extensions to a composed root, in order.
#[derive(Debug, Clone)]
pub struct ExtensionRunner {
    catalog: Arc<ExtensionCatalog>,
}

impl ExtensionRunner {
    /// Creates a runner over the given extension catalog.
    #[must_use]
    pub const fn new(catalog: Arc<ExtensionCatalog>) -> Self {
        Self { catalog }
    }

    /// Constructs and applies each named extension exactly once.
    ///
    /// Every name is resolved before any extension runs, so an unknown name
    /// leaves `root` untouched. Extensions then run sequentially in declared
    /// order; each is constructed only after the previous one has finished.
    /// Repeated names run once, at their first position. Returns the names
    /// that ran.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionRunError::Configuration`] naming the first unknown
    /// extension, or [`ExtensionRunError::ExtensionFailed`] when an
    /// extension fails; later extensions do not run.
    pub fn run(
        &self,
        names: &[String],
        root: &mut dyn CompositionRoot,
    ) -> ExtensionRunResult<Vec<String>> {
        let plan = self.plan(names)?;

        let mut applied = Vec::with_capacity(plan.len());
        for (name, constructor) in plan {
            let extension = constructor();
            extension
                .accept(root)
                .map_err(|source| ExtensionRunError::ExtensionFailed {
                    name: name.to_owned(),
                    source,
                })?;
            info!(extension = name, "applied extension");
            applied.push(name.to_owned());
        }
        Ok(applied)
    }

    fn plan<'a>(
        &'a self,
        names: &'a [String],
    ) -> ExtensionRunResult<Vec<(&'a str, &'a ExtensionConstructor)>> {
        let mut seen = HashSet::new();
        let mut plan = Vec::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let constructor = self
                .catalog
                .get(name)
                .ok_or_else(|| ConfigurationError::UnknownExtension(name.clone()))?;
            plan.push((name.as_str(), constructor));
        }
        Ok(plan)
    }
}
