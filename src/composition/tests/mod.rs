//! Unit tests for capability composition.
