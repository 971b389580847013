//! Port contracts for capability composition.
//!
//! Ports define the registration target shared with the transport layer and
//! the narrow interface startup extensions implement.

mod extension;
mod root;

pub use extension::{Extension, ExtensionError};
pub use root::{CompositionRoot, RootError, RootResult, ServiceUnit};
