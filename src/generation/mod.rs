//! Generation backend resolution for gropius.
//!
//! Several mutually incompatible backend families (local hub models, GGUF
//! artifacts served by a native library, remote API routes, and custom
//! families) satisfy one generation contract. This module resolves an
//! identifier to a family, constructs the family's backend through a static
//! catalog, and exposes the result through the uniform [`services::Generator`]
//! call surface. The module follows hexagonal architecture:
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
