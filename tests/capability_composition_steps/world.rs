//! Shared world state for capability composition BDD scenarios.

use gropius::composition::{
    adapters::InMemoryCompositionRoot,
    domain::{CompositionReport, Configuration},
    services::{CapabilityComposer, ComposeError},
};
use rstest::fixture;

/// Scenario world for capability composition behaviour tests.
pub struct CompositionWorld {
    /// The composer under test.
    pub composer: CapabilityComposer,
    /// Declared configuration.
    pub configuration: Configuration,
    /// Root receiving service units.
    pub root: InMemoryCompositionRoot,
    /// Result of the last composition.
    pub last_result: Option<Result<CompositionReport, ComposeError>>,
}

impl CompositionWorld {
    /// Creates a world with the standard composer and an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            composer: CapabilityComposer::standard(),
            configuration: Configuration::new(),
            root: InMemoryCompositionRoot::new(),
            last_result: None,
        }
    }

    /// Returns the last successful composition report.
    pub fn last_report(&self) -> Result<&CompositionReport, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Ok(report)) => Ok(report),
            Some(Err(err)) => Err(eyre::eyre!("composition failed: {err}")),
            None => Err(eyre::eyre!("no composition has run in scenario world")),
        }
    }
}

impl Default for CompositionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CompositionWorld {
    CompositionWorld::default()
}

/// Splits a comma separated step argument into trimmed names.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_owned()).collect()
}
