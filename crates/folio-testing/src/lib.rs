//! Testing infrastructure for folio integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured `folio` command
//! - `assertions`: checks against the JSON envelope the CLI prints
//! - `fixtures`: scenario catalogs and config files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
