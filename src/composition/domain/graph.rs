//! Capability implication rules.
//!
//! An [`ImplicationEdge`] adds its implied capability when every trigger
//! capability is declared and the implied one is not. Edges fire against
//! the declared set only; capabilities added by one edge never trigger
//! another, so the outcome does not depend on edge order.

use super::CapabilityName;
use crate::error::ConfigurationError;
use std::collections::{BTreeSet, HashSet};

/// Rule adding `implied` when every capability in `trigger` is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicationEdge {
    trigger: BTreeSet<CapabilityName>,
    implied: CapabilityName,
}

impl ImplicationEdge {
    /// Creates an implication edge.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidEdge`] when the trigger set is
    /// empty or contains the implied capability itself.
    pub fn new(
        trigger: impl IntoIterator<Item = CapabilityName>,
        implied: CapabilityName,
    ) -> Result<Self, ConfigurationError> {
        let trigger: BTreeSet<CapabilityName> = trigger.into_iter().collect();

        if trigger.is_empty() {
            return Err(ConfigurationError::InvalidEdge {
                implied: implied.to_string(),
                reason: "trigger set must not be empty".to_owned(),
            });
        }

        if trigger.contains(&implied) {
            return Err(ConfigurationError::InvalidEdge {
                implied: implied.to_string(),
                reason: "a capability cannot imply itself".to_owned(),
            });
        }

        Ok(Self { trigger, implied })
    }

    /// Returns the capabilities that must all be declared.
    #[must_use]
    pub const fn trigger(&self) -> &BTreeSet<CapabilityName> {
        &self.trigger
    }

    /// Returns the capability added when the edge fires.
    #[must_use]
    pub const fn implied(&self) -> &CapabilityName {
        &self.implied
    }

    fn is_triggered_by(&self, declared: &HashSet<CapabilityName>) -> bool {
        self.trigger.iter().all(|name| declared.contains(name))
    }
}

/// Static table of implication edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityGraph {
    edges: Vec<ImplicationEdge>,
}

impl CapabilityGraph {
    /// Creates a graph from the given edges.
    #[must_use]
    pub fn new(edges: impl IntoIterator<Item = ImplicationEdge>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// Returns the standard implication table.
    ///
    /// - `embeddings` implies `similarity`
    /// - `cluster` implies `embeddings`
    #[must_use]
    pub fn standard() -> Self {
        let edge = |trigger: &'static str, implied: &'static str| ImplicationEdge {
            trigger: BTreeSet::from([CapabilityName::from_static(trigger)]),
            implied: CapabilityName::from_static(implied),
        };
        Self::new([edge("embeddings", "similarity"), edge("cluster", "embeddings")])
    }

    /// Returns the edges in table order.
    #[must_use]
    pub fn edges(&self) -> &[ImplicationEdge] {
        &self.edges
    }

    /// Expands a declared capability set with every implied capability.
    ///
    /// Duplicate declarations collapse to one entry. Each implied
    /// capability is added at most once, however many edges imply it.
    pub fn resolve<'a>(
        &self,
        declared: impl IntoIterator<Item = &'a CapabilityName>,
    ) -> ResolvedCapabilitySet {
        let mut names = Vec::new();
        let mut present = HashSet::new();
        for name in declared {
            if present.insert(name.clone()) {
                names.push(name.clone());
            }
        }

        let declared_only = present.clone();
        let mut implied = Vec::new();
        for edge in &self.edges {
            if edge.is_triggered_by(&declared_only) && present.insert(edge.implied.clone()) {
                names.push(edge.implied.clone());
                implied.push(edge.implied.clone());
            }
        }

        ResolvedCapabilitySet { names, implied }
    }
}

/// Declared capabilities together with those added by implication.
///
/// Iteration yields declared names in declaration order followed by implied
/// names in edge-table order. Equality compares membership only.
#[derive(Debug, Clone, Default)]
pub struct ResolvedCapabilitySet {
    names: Vec<CapabilityName>,
    implied: Vec<CapabilityName>,
}

impl ResolvedCapabilitySet {
    /// Returns all resolved names.
    #[must_use]
    pub fn names(&self) -> &[CapabilityName] {
        &self.names
    }

    /// Returns the names added by implication.
    #[must_use]
    pub fn implied(&self) -> &[CapabilityName] {
        &self.implied
    }

    /// Returns whether `name` is resolved.
    #[must_use]
    pub fn contains(&self, name: &CapabilityName) -> bool {
        self.names.contains(name)
    }

    /// Returns an iterator over all resolved names.
    pub fn iter(&self) -> std::slice::Iter<'_, CapabilityName> {
        self.names.iter()
    }

    /// Returns the number of resolved names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether nothing is resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PartialEq for ResolvedCapabilitySet {
    fn eq(&self, other: &Self) -> bool {
        let ours: HashSet<&CapabilityName> = self.names.iter().collect();
        let theirs: HashSet<&CapabilityName> = other.names.iter().collect();
        ours == theirs
    }
}

impl Eq for ResolvedCapabilitySet {}

impl<'a> IntoIterator for &'a ResolvedCapabilitySet {
    type Item = &'a CapabilityName;
    type IntoIter = std::slice::Iter<'a, CapabilityName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
