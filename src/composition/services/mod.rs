//! Application services for capability composition and startup extensions.

mod composer;
mod extensions;

pub use composer::{CapabilityComposer, ComposeError, ComposeResult};
pub use extensions::{ExtensionRunError, ExtensionRunResult, ExtensionRunner};
