//! Step definitions for capability composition scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
