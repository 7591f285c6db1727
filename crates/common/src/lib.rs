//! Shared id and clock helpers used across all parley crates.

pub mod clock;
pub mod ids;
