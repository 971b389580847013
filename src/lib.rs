//! Gropius: capability composition and generation backend resolution.
//!
//! A deployment declares the capabilities it serves as an ordered
//! configuration mapping. Gropius expands that declaration through a table of
//! implication rules, registers one service unit per capability into a
//! composition root, and applies named startup extensions to the result.
//! Independently, it resolves a model identifier to one of several
//! generation backend families and exposes every family through one
//! generation call surface.
//!
//! # Architecture
//!
//! Gropius follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (catalogs, in-memory roots)
//!
//! # Modules
//!
//! - [`composition`]: Capability graph, service unit composition and extensions
//! - [`generation`]: Backend family inference, resolution and the generator
//! - [`application`]: Startup settings, the startup pass and the application slot
//! - [`catalog`]: Exact-match name to constructor tables
//! - [`error`]: Configuration errors shared across contexts

pub mod application;
pub mod catalog;
pub mod composition;
pub mod error;
pub mod generation;
