//! Unit tests for application startup.
