//! Configuration schema and loader for the parley runtime.
//!
//! Config comes from `parley.toml` in the working directory, with every field
//! overridable from the environment. Missing file means defaults.

pub mod loader;
pub mod schema;

pub use {
    loader::{discover_and_load, load_config},
    schema::ParleyConfig,
};
