//! In-memory composition root.

use crate::composition::{
    domain::CapabilityName,
    ports::{CompositionRoot, RootError, RootResult, ServiceUnit},
};
use serde_json::Value;

/// Composition root holding registered units and integrations in memory.
///
/// Registration order is preserved. The transport layer reads the units
/// back to mount their routes.
#[derive(Debug, Default)]
pub struct InMemoryCompositionRoot {
    units: Vec<Box<dyn ServiceUnit>>,
    integrations: Vec<(String, Value)>,
}

impl InMemoryCompositionRoot {
    /// Creates an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names of installed integrations in installation order.
    pub fn integration_names(&self) -> impl Iterator<Item = &str> {
        self.integrations.iter().map(|(name, _)| name.as_str())
    }
}

impl CompositionRoot for InMemoryCompositionRoot {
    fn register_unit(&mut self, unit: Box<dyn ServiceUnit>) -> RootResult<()> {
        if self.contains_unit(unit.name()) {
            return Err(RootError::DuplicateUnit(unit.name().clone()));
        }
        self.units.push(unit);
        Ok(())
    }

    fn contains_unit(&self, name: &CapabilityName) -> bool {
        self.units.iter().any(|unit| unit.name() == name)
    }

    fn unit(&self, name: &CapabilityName) -> Option<&dyn ServiceUnit> {
        self.units
            .iter()
            .find(|unit| unit.name() == name)
            .map(|unit| &**unit)
    }

    fn unit_names(&self) -> Vec<CapabilityName> {
        self.units.iter().map(|unit| unit.name().clone()).collect()
    }

    fn install_integration(&mut self, name: &str, integration: Value) -> RootResult<()> {
        if self.integration(name).is_some() {
            return Err(RootError::DuplicateIntegration(name.to_owned()));
        }
        self.integrations.push((name.to_owned(), integration));
        Ok(())
    }

    fn integration(&self, name: &str) -> Option<&Value> {
        self.integrations
            .iter()
            .find(|(installed, _)| installed == name)
            .map(|(_, integration)| integration)
    }
}
