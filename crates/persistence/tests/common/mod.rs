//! Test infrastructure for the persistence layer.
//!
//! Form fixtures and repository builders shared by the integration tests.

pub mod fixtures;

pub use fixtures::*;
