//! Shared fixtures and known-answer vectors for the nhdss integration tests
pub mod fixtures;
pub mod vectors;
