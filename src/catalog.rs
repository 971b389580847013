//! Static name-to-constructor registry.
//!
//! Backends, service units, extensions and composition roots are all
//! selected by name from configuration. Each kind keeps its constructors in
//! a [`Catalog`] populated during a single registration step and queried by
//! exact-match lookup.

use std::collections::BTreeMap;
use std::fmt;

/// Exact-match registry of constructors keyed by name.
pub struct Catalog<F> {
    entries: BTreeMap<String, F>,
}

impl<F> Catalog<F> {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers a constructor under `name`.
    ///
    /// Returns the constructor previously registered under the same name,
    /// which the new entry replaces.
    pub fn register(&mut self, name: impl Into<String>, constructor: F) -> Option<F> {
        self.entries.insert(name.into(), constructor)
    }

    /// Looks up the constructor registered under exactly `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&F> {
        self.entries.get(name)
    }

    /// Returns whether a constructor is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of registered constructors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F> Default for Catalog<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for Catalog<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
