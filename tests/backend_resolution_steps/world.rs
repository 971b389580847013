//! Shared world state for backend resolution BDD scenarios.

use std::sync::Arc;

use gropius::generation::{
    adapters::{BackendCatalog, memory::EchoBackend},
    domain::{BackendIdentifier, BackendMethod, BackendOptions, GenerationError, GenerationOutput},
    ports::{BackendResult, GenerationBackend},
    services::{BackendResolver, Generator, ResolveError},
};
use rstest::fixture;

/// Scenario world for backend resolution behaviour tests.
pub struct ResolutionWorld {
    /// Resolver over echo backends for every well-known family.
    pub resolver: BackendResolver,
    /// Identifier passed to the generator, if any.
    pub identifier: Option<String>,
    /// Explicit family passed to the generator, if any.
    pub method: Option<String>,
    /// Result of the last generator construction.
    pub generator: Option<Result<Generator, ResolveError>>,
    /// Result of the last generation call.
    pub output: Option<Result<GenerationOutput, GenerationError>>,
}

impl ResolutionWorld {
    /// Creates a world whose families are all served by echo backends.
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = BackendCatalog::new();
        catalog
            .register(&BackendMethod::Transformers, echo)
            .register(&BackendMethod::LlamaCpp, echo)
            .register(&BackendMethod::LiteLlm, echo);
        Self {
            resolver: BackendResolver::new(Arc::new(catalog)),
            identifier: None,
            method: None,
            generator: None,
            output: None,
        }
    }

    /// Returns the successfully constructed generator.
    pub fn generator(&self) -> Result<&Generator, eyre::Report> {
        match self.generator.as_ref() {
            Some(Ok(generator)) => Ok(generator),
            Some(Err(err)) => Err(eyre::eyre!("generator construction failed: {err}")),
            None => Err(eyre::eyre!("no generator created in scenario world")),
        }
    }
}

impl Default for ResolutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn echo(
    _identifier: &BackendIdentifier,
    options: &BackendOptions,
) -> BackendResult<Arc<dyn GenerationBackend>> {
    Ok(Arc::new(EchoBackend::from_options(options)?))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma separated step argument into trimmed values.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',').map(|value| value.trim().to_owned()).collect()
}
