//! Shared building blocks for the subfin workspace: run configuration,
//! the target-domain model, hostname normalization and wordlist handling.

pub mod config;
pub mod domain;
pub mod wordlist;
