//! Composition root port.

use crate::composition::domain::CapabilityName;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for composition root operations.
pub type RootResult<T> = Result<T, RootError>;

/// Service unit backing one capability of the composed system.
pub trait ServiceUnit: fmt::Debug + Send + Sync {
    /// Returns the capability this unit serves.
    fn name(&self) -> &CapabilityName;

    /// Returns the settings the unit was constructed with.
    fn settings(&self) -> &Value;

    /// Returns the route prefix under which the transport layer mounts the
    /// unit.
    fn route_prefix(&self) -> &str;
}

/// Shared registration target for service units and extensions.
///
/// The composer registers one unit per resolved capability; extensions then
/// read the registered units and install out-of-band integrations.
pub trait CompositionRoot: Send + Sync {
    /// Registers a service unit.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::DuplicateUnit`] when a unit with the same name is
    /// already registered.
    fn register_unit(&mut self, unit: Box<dyn ServiceUnit>) -> RootResult<()>;

    /// Returns whether a unit is registered under `name`.
    fn contains_unit(&self, name: &CapabilityName) -> bool;

    /// Returns the unit registered under `name`.
    fn unit(&self, name: &CapabilityName) -> Option<&dyn ServiceUnit>;

    /// Returns registered unit names in registration order.
    fn unit_names(&self) -> Vec<CapabilityName>;

    /// Installs a named integration alongside the registered units.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::DuplicateIntegration`] when the name is taken.
    fn install_integration(&mut self, name: &str, integration: Value) -> RootResult<()>;

    /// Returns the integration installed under `name`.
    fn integration(&self, name: &str) -> Option<&Value>;
}

/// Errors returned by composition root implementations.
#[derive(Debug, Clone, Error)]
pub enum RootError {
    /// A unit with the same name is already registered.
    #[error("service unit already registered: {0}")]
    DuplicateUnit(CapabilityName),

    /// An integration with the same name is already installed.
    #[error("integration already installed: {0}")]
    DuplicateIntegration(String),

    /// The root rejected the operation.
    #[error("composition root rejected operation: {0}")]
    Rejected(Arc<dyn std::error::Error + Send + Sync>),
}

impl RootError {
    /// Wraps an implementation-specific rejection.
    pub fn rejected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Rejected(Arc::new(err))
    }
}
