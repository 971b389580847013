//! Outcome of a composition pass.

use super::CapabilityName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a resolved capability did not produce a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No service unit is catalogued for the capability; the key is a
    /// plain setting or a trigger-only capability.
    NoServiceUnit,
    /// A unit with the same name is already registered in the root.
    AlreadyRegistered,
}

impl SkipReason {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoServiceUnit => "no_service_unit",
            Self::AlreadyRegistered => "already_registered",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered and skipped capabilities of one composition pass, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionReport {
    registered: Vec<CapabilityName>,
    skipped: Vec<(CapabilityName, SkipReason)>,
}

impl CompositionReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registered: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Records a registration.
    pub fn record_registered(&mut self, name: CapabilityName) {
        self.registered.push(name);
    }

    /// Records a skipped capability.
    pub fn record_skipped(&mut self, name: CapabilityName, reason: SkipReason) {
        self.skipped.push((name, reason));
    }

    /// Returns the capabilities registered during the pass.
    #[must_use]
    pub fn registered(&self) -> &[CapabilityName] {
        &self.registered
    }

    /// Returns the capabilities skipped during the pass.
    #[must_use]
    pub fn skipped(&self) -> &[(CapabilityName, SkipReason)] {
        &self.skipped
    }
}
