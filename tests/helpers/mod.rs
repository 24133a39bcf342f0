//! Shared fixtures and lookups for integration tests.

pub mod source_fixtures;
pub mod tree_helpers;
