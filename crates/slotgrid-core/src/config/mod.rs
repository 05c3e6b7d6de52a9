//! Configuration module for availability editors
//!
//! Supports YAML configuration files and programmatic configuration building.

pub mod builder;
pub mod loader;
pub mod types;

pub use builder::ConfigBuilder;
pub use loader::*;
pub use types::*;


use crate::errors::EditorError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<SlotGridConfig, EditorError> {
    ConfigLoader::from_file(path).await
}

/// Create a new configuration builder
pub fn config() -> ConfigBuilder {
    ConfigBuilder::new()
}
