//! Fluent builder for editor configurations.

use chrono::NaiveDate;

use crate::config::types::*;
use crate::errors::EditorError;

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: SlotGridConfig,
}

impl ConfigBuilder {
    /// Create a new builder. Dates default to 1970-01-01 and should be set.
    pub fn new() -> Self {
        Self {
            config: SlotGridConfig {
                editor: EditorConfig {
                    timezone: "UTC".to_string(),
                    language: "en".to_string(),
                    start_date: NaiveDate::default(),
                    end_date: NaiveDate::default(),
                    slot_resolution_minutes: 30,
                },
                logging: LoggingConfig::default(),
            },
        }
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.config.editor.timezone = timezone.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.editor.language = language.into();
        self
    }

    /// Set the inclusive editable date range
    pub fn date_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.config.editor.start_date = start_date;
        self.config.editor.end_date = end_date;
        self
    }

    pub fn slot_resolution_minutes(mut self, minutes: u32) -> Self {
        self.config.editor.slot_resolution_minutes = minutes;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SlotGridConfig, EditorError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> SlotGridConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
