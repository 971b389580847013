//! Step definitions for startup extension scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
