//! Shared world state for startup extension BDD scenarios.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gropius::application::{ApplicationSlot, StartupError};
use gropius::composition::{
    adapters::ExtensionCatalog,
    domain::Configuration,
    ports::{CompositionRoot, Extension, ExtensionError},
};
use rstest::fixture;
use serde_json::json;

/// Ordered record of extension construction and invocation.
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Extension recording its invocation and the units it observed.
struct RecordingExtension {
    name: &'static str,
    events: EventLog,
}

impl Extension for RecordingExtension {
    fn accept(&self, root: &mut dyn CompositionRoot) -> Result<(), ExtensionError> {
        record(&self.events, format!("accept {}", self.name));
        let units = root.unit_names().len();
        root.install_integration(self.name, json!({ "units": units }))?;
        Ok(())
    }
}

fn record(events: &EventLog, event: String) {
    if let Ok(mut log) = events.lock() {
        log.push(event);
    }
}

/// Scenario world for startup extension behaviour tests.
pub struct StartupWorld {
    /// Environment variables visible to startup.
    pub environment: HashMap<String, String>,
    /// Declared configuration.
    pub configuration: Configuration,
    /// Extension events in the order they happened.
    pub events: EventLog,
    /// Slot holding the composed application.
    pub slot: ApplicationSlot,
    /// Outcome of each startup attempt, in order.
    pub outcomes: Vec<Result<(), StartupError>>,
}

impl StartupWorld {
    /// Creates a world with an empty environment and slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: HashMap::new(),
            configuration: Configuration::new(),
            events: EventLog::default(),
            slot: ApplicationSlot::new(),
            outcomes: Vec::new(),
        }
    }

    /// Builds an extension catalog with the `audit` and `metrics`
    /// extensions recording into this world's event log.
    #[must_use]
    pub fn extension_catalog(&self) -> ExtensionCatalog {
        let mut catalog = ExtensionCatalog::new();
        for name in ["audit", "metrics"] {
            let events = Arc::clone(&self.events);
            catalog.register(name, move || {
                record(&events, format!("construct {name}"));
                Box::new(RecordingExtension {
                    name,
                    events: Arc::clone(&events),
                }) as Box<dyn Extension>
            });
        }
        catalog
    }

    /// Returns the recorded extension events.
    pub fn recorded_events(&self) -> Result<Vec<String>, eyre::Report> {
        self.events
            .lock()
            .map(|log| log.clone())
            .map_err(|_| eyre::eyre!("extension event log poisoned"))
    }

    /// Returns the outcome of the most recent startup attempt.
    pub fn last_outcome(&self) -> Result<&Result<(), StartupError>, eyre::Report> {
        self.outcomes
            .last()
            .ok_or_else(|| eyre::eyre!("no startup attempted in scenario world"))
    }
}

impl Default for StartupWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StartupWorld {
    StartupWorld::default()
}
