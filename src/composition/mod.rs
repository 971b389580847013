//! Capability composition for gropius.
//!
//! A deployment declares the capabilities it wants as configuration keys.
//! This module expands that declaration through a table of implication
//! rules, registers one service unit per resolved capability into a shared
//! composition root, and then applies named startup extensions to the
//! composed root. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
