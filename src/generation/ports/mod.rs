//! Port contracts for generation backends.
//!
//! Concrete families (local runtimes, native libraries, remote clients)
//! live outside this crate and plug in through these traits.

mod backend;

#[cfg(test)]
pub(crate) use backend::MockGenerationBackend;
pub use backend::{BackendResult, GenerationBackend, SerialGenerationBackend};
