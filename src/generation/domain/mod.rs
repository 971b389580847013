//! Domain model for generation backend resolution.
//!
//! Identifiers, backend families and the call-surface shapes live here,
//! together with the inference rule mapping an identifier to a family. No
//! backend is constructed inside this boundary.

mod capabilities;
mod error;
mod identifier;
mod inference;
mod method;
mod options;
mod prompt;

pub use capabilities::BackendCapabilities;
pub use error::{
    BackendError, BackendUnavailableError, CapabilityMismatchError, GenerationError,
    GenerationResult,
};
pub use identifier::{BackendIdentifier, DEFAULT_IDENTIFIER};
pub use inference::{REMOTE_PROVIDERS, infer};
pub use method::BackendMethod;
pub use options::{BackendOptions, GenerationOptions, OptionMap};
pub use prompt::{DEFAULT_MAX_LENGTH, GenerationInput, GenerationOutput, InputShape};
