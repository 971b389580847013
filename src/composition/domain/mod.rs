//! Domain model for capability composition.
//!
//! Capability names, the declared configuration, implication rules and
//! composition outcomes. Registration targets and extension points are
//! ports and live outside this boundary.

mod configuration;
mod graph;
mod name;
mod report;

pub use configuration::Configuration;
pub use graph::{CapabilityGraph, ImplicationEdge, ResolvedCapabilitySet};
pub use name::CapabilityName;
pub use report::{CompositionReport, SkipReason};
