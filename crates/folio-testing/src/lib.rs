//! Testing infrastructure for folio integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory plus a preconfigured `folio` command
//! - `fixtures`: sample records and interchange-file placement

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
