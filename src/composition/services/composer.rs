//! Capability composition service.
//!
//! Provides [`CapabilityComposer`], which expands declared capabilities
//! through the implication graph and registers one service unit per
//! resolved capability into a composition root.

use crate::composition::{
    adapters::UnitCatalog,
    domain::{
        CapabilityGraph, CompositionReport, Configuration, ResolvedCapabilitySet, SkipReason,
    },
    ports::{CompositionRoot, RootError},
};
use crate::error::ConfigurationError;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for composition.
#[derive(Debug, Clone, Error)]
pub enum ComposeError {
    /// A unit rejected its settings.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The root rejected a registration.
    #[error(transparent)]
    Root(#[from] RootError),
}

/// Result type for composition operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Expands declared capabilities and wires their service units.
#[derive(Debug, Clone)]
pub struct CapabilityComposer {
    graph: CapabilityGraph,
    units: Arc<UnitCatalog>,
}

impl CapabilityComposer {
    /// Creates a composer over an implication graph and unit catalog.
    #[must_use]
    pub const fn new(graph: CapabilityGraph, units: Arc<UnitCatalog>) -> Self {
        Self { graph, units }
    }

    /// Creates a composer with the standard graph and unit catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CapabilityGraph::standard(), Arc::new(UnitCatalog::standard()))
    }

    /// Returns the implication graph.
    #[must_use]
    pub const fn graph(&self) -> &CapabilityGraph {
        &self.graph
    }

    /// Resolves the capabilities declared by `configuration`.
    #[must_use]
    pub fn resolve(&self, configuration: &Configuration) -> ResolvedCapabilitySet {
        let resolved = self.graph.resolve(configuration.names());
        for implied in resolved.implied() {
            debug!(capability = %implied, "capability added by implication");
        }
        resolved
    }

    /// Registers one service unit per resolved capability into `root`.
    ///
    /// Settings come from `configuration`; implied capabilities absent from
    /// it receive `null`. Capabilities without a catalogued unit and units
    /// already present in `root` are skipped and reported.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Configuration`] when a unit rejects its
    /// settings, or [`ComposeError::Root`] when the root refuses a
    /// registration. Composition stops at the first error.
    pub fn compose(
        &self,
        resolved: &ResolvedCapabilitySet,
        configuration: &Configuration,
        root: &mut dyn CompositionRoot,
    ) -> ComposeResult<CompositionReport> {
        let mut report = CompositionReport::new();
        let mut registered = HashSet::new();
        let empty_settings = Value::Null;

        for name in resolved {
            if registered.contains(name) || root.contains_unit(name) {
                debug!(capability = %name, "service unit already registered");
                report.record_skipped(name.clone(), SkipReason::AlreadyRegistered);
                continue;
            }

            let Some(constructor) = self.units.get(name) else {
                debug!(capability = %name, "no service unit for capability");
                report.record_skipped(name.clone(), SkipReason::NoServiceUnit);
                continue;
            };

            let settings = configuration.get(name).unwrap_or(&empty_settings);
            let unit = constructor(name, settings)?;
            root.register_unit(unit)?;
            registered.insert(name.clone());
            info!(capability = %name, "registered service unit");
            report.record_registered(name.clone());
        }

        Ok(report)
    }
}
