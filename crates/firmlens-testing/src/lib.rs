//! Shared test tooling for firmlens integration tests.

pub mod fixtures;
pub mod world;

pub use world::{CommandResult, TestWorld};
