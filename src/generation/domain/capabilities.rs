//! Call-time constraints a backend can honour.

use serde::{Deserialize, Serialize};

/// Describes which generation constraints a backend supports.
///
/// The facade consults these flags before every call so that constraints a
/// backend cannot respect are rejected instead of silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCapabilities {
    bounds_output_length: bool,
    accepts_batches: bool,
}

impl BackendCapabilities {
    /// Creates capabilities from the two constraint flags.
    #[must_use]
    pub const fn new(bounds_output_length: bool, accepts_batches: bool) -> Self {
        Self {
            bounds_output_length,
            accepts_batches,
        }
    }

    /// Returns whether the backend can bound generated output length.
    #[must_use]
    pub const fn bounds_output_length(&self) -> bool {
        self.bounds_output_length
    }

    /// Returns whether the backend accepts more than one prompt per call.
    ///
    /// Backends without batch support receive one prompt per call.
    #[must_use]
    pub const fn accepts_batches(&self) -> bool {
        self.accepts_batches
    }
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        Self::new(true, true)
    }
}
