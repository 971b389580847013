//! Application services for backend resolution and generation.

mod generator;
mod resolver;

pub use generator::Generator;
pub use resolver::{BackendHandle, BackendResolver, ResolveError, ResolveResult};
