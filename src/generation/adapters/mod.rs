//! Adapter implementations for generation backend ports.

mod catalog;
mod exclusive;
pub mod memory;

pub use catalog::{BackendCatalog, BackendConstructor};
pub use exclusive::ExclusiveBackend;
