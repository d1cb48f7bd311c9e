//! Unit tests for the lost-and-found module.
