//! Configuration loader for YAML files.

use crate::config::types::*;
use crate::errors::EditorError;
use std::path::Path;
use tokio::fs;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<SlotGridConfig, EditorError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            EditorError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<SlotGridConfig, EditorError> {
        let config: SlotGridConfig = serde_yaml::from_str(content)
            .map_err(|e| EditorError::ConfigError(format!("Failed to parse YAML config: {}", e)))?;

        config.validate()?;

        log::debug!(
            "Loaded editor configuration for {} .. {} ({})",
            config.editor.start_date,
            config.editor.end_date,
            config.editor.timezone
        );

        Ok(config)
    }
}
