//! Unit tests for the community module.
