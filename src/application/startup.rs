//! The startup pass producing a composed [`Application`].

use super::StartupSettings;
use crate::composition::{
    adapters::{DEFAULT_ROOT_KIND, ExtensionCatalog, RootCatalog, load_configuration},
    domain::{CompositionReport, Configuration, ResolvedCapabilitySet},
    ports::CompositionRoot,
    services::{CapabilityComposer, ComposeError, ExtensionRunError, ExtensionRunner},
};
use crate::error::ConfigurationError;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that abort startup or guard the application slot.
#[derive(Debug, Clone, Error)]
pub enum StartupError {
    /// Configuration could not be loaded or interpreted.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Service unit registration failed.
    #[error(transparent)]
    Composition(#[from] ComposeError),
    /// An extension could not be resolved or applied.
    #[error(transparent)]
    Extension(#[from] ExtensionRunError),
    /// The slot already holds an application.
    #[error("application already initialized")]
    AlreadyInitialized,
    /// The slot was read before startup completed.
    #[error("application not initialized")]
    NotInitialized,
}

/// Result type for startup operations.
pub type StartupResult<T> = Result<T, StartupError>;

/// A composed application, immutable once startup completes.
pub struct Application {
    root: Box<dyn CompositionRoot>,
    configuration: Configuration,
    resolved: ResolvedCapabilitySet,
    report: CompositionReport,
    extensions: Vec<String>,
    started_at: DateTime<Utc>,
}

impl Application {
    /// Returns the composed root.
    #[must_use]
    pub fn root(&self) -> &dyn CompositionRoot {
        &*self.root
    }

    /// Returns the declared configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Returns the declared capabilities expanded through the implication
    /// graph.
    #[must_use]
    pub const fn resolved(&self) -> &ResolvedCapabilitySet {
        &self.resolved
    }

    /// Returns the registered and skipped capabilities.
    #[must_use]
    pub const fn report(&self) -> &CompositionReport {
        &self.report
    }

    /// Returns the extensions applied, in order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns when startup completed.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("units", &self.root.unit_names())
            .field("configuration", &self.configuration)
            .field("resolved", &self.resolved)
            .field("report", &self.report)
            .field("extensions", &self.extensions)
            .field("started_at", &self.started_at)
            .finish()
    }
}

/// Runs configuration loading, composition and extensions in one pass.
#[derive(Debug, Clone)]
pub struct Startup<C>
where
    C: Clock + Send + Sync,
{
    composer: CapabilityComposer,
    extensions: ExtensionRunner,
    roots: Arc<RootCatalog>,
    clock: Arc<C>,
}

impl Startup<DefaultClock> {
    /// Creates a startup pass with the standard graph, units and root kinds
    /// and the given extension catalog.
    #[must_use]
    pub fn standard(extensions: Arc<ExtensionCatalog>) -> Self {
        Self::new(
            CapabilityComposer::standard(),
            ExtensionRunner::new(extensions),
            Arc::new(RootCatalog::standard()),
            Arc::new(DefaultClock),
        )
    }
}

impl<C> Startup<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a startup pass from its collaborators.
    #[must_use]
    pub const fn new(
        composer: CapabilityComposer,
        extensions: ExtensionRunner,
        roots: Arc<RootCatalog>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            composer,
            extensions,
            roots,
            clock,
        }
    }

    /// Loads the configuration named by `settings` and composes it.
    ///
    /// Without a configuration path the configuration is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Configuration`] when the file cannot be read
    /// or parsed, and any error from [`Self::run_with_configuration`].
    pub fn run(&self, settings: &StartupSettings) -> StartupResult<Application> {
        let configuration = match settings.config_path() {
            Some(path) => load_configuration(path)?,
            None => Configuration::new(),
        };
        self.run_with_configuration(configuration, settings)
    }

    /// Composes `configuration` into a fresh root and applies the
    /// extensions named by `settings`.
    ///
    /// Capabilities are resolved, a root of the requested kind is built,
    /// service units are registered, and extensions run last.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Configuration`] for an unknown root kind,
    /// [`StartupError::Composition`] when a unit cannot be registered, and
    /// [`StartupError::Extension`] when an extension is unknown or fails.
    pub fn run_with_configuration(
        &self,
        configuration: Configuration,
        settings: &StartupSettings,
    ) -> StartupResult<Application> {
        let kind = settings.root_kind().unwrap_or(DEFAULT_ROOT_KIND);
        let build_root = self
            .roots
            .get(kind)
            .ok_or_else(|| ConfigurationError::UnknownRootKind(kind.to_owned()))?;

        let resolved = self.composer.resolve(&configuration);
        let mut root = build_root(&configuration);
        let report = self
            .composer
            .compose(&resolved, &configuration, &mut *root)?;
        let extensions = self.extensions.run(settings.extensions(), &mut *root)?;

        info!(
            root_kind = kind,
            units = report.registered().len(),
            skipped = report.skipped().len(),
            extensions = extensions.len(),
            "startup complete"
        );

        Ok(Application {
            root,
            configuration,
            resolved,
            report,
            extensions,
            started_at: self.clock.utc(),
        })
    }
}
