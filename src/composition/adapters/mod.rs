//! Adapter implementations for capability composition ports.

mod extensions;
mod loader;
mod memory;
mod roots;
mod units;

pub use extensions::{ExtensionCatalog, ExtensionConstructor};
pub use loader::load_configuration;
pub use memory::InMemoryCompositionRoot;
pub use roots::{DEFAULT_ROOT_KIND, RootCatalog, RootConstructor};
pub use units::{ConfiguredUnit, STANDARD_CAPABILITIES, UnitCatalog, UnitConstructor};
