//! Unit tests for generation backend resolution.
