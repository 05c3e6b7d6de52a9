//! Configuration type definitions for availability editors
//!
//! One configuration describes every editor on a page: they share the time
//! zone, the locale and the editable date range, and differ only in the field
//! they are attached to.

use chrono::NaiveDate;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use slotgrid_types::{GridOptions, VisibleRange, DEFAULT_SLOT_COLOR};

use crate::availability::Span;
use crate::errors::EditorError;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotGridConfig {
    pub editor: EditorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// IANA zone name used to interpret and display all slots.
    pub timezone: String,
    /// Locale tag for calendar chrome only.
    #[serde(default = "default_language")]
    pub language: String,
    /// First editable day.
    pub start_date: NaiveDate,
    /// Last editable day, inclusive.
    pub end_date: NaiveDate,
    #[serde(default = "default_slot_resolution")]
    pub slot_resolution_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_slot_resolution() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, EditorError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| EditorError::ConfigError(format!("Unknown log level '{}'", self.level)))
    }
}

impl SlotGridConfig {
    pub fn validate(&self) -> Result<(), EditorError> {
        self.editor.validate()?;
        self.logging.level_filter()?;
        Ok(())
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), EditorError> {
        if !is_iana_like(&self.timezone) {
            return Err(EditorError::ConfigError(format!(
                "'{}' is not an IANA time zone name",
                self.timezone
            )));
        }

        if self.language.trim().is_empty() {
            return Err(EditorError::ConfigError("Language must not be empty".to_string()));
        }

        if self.start_date > self.end_date {
            return Err(EditorError::ConfigError(format!(
                "start_date {} is after end_date {}",
                self.start_date, self.end_date
            )));
        }

        let resolution = self.slot_resolution_minutes;
        if resolution == 0 || MINUTES_PER_DAY % resolution != 0 {
            return Err(EditorError::ConfigError(format!(
                "slot_resolution_minutes must divide a day, got {}",
                resolution
            )));
        }

        Ok(())
    }

    /// The rendered range, from the first day up to midnight after the last.
    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange::from_dates(self.start_date, self.end_date)
    }

    /// Frame submitted availabilities are clamped to.
    pub fn event_frame(&self) -> Span {
        Span::event_frame(self.start_date, self.end_date)
    }

    pub fn grid_options(&self, editable: bool) -> GridOptions {
        GridOptions {
            time_zone: self.timezone.clone(),
            locale: self.language.clone(),
            visible_range: self.visible_range(),
            slot_resolution_minutes: self.slot_resolution_minutes,
            editable,
            selectable: editable,
            select_overlap: false,
            event_overlap: false,
            all_day_slot: true,
            slot_color: DEFAULT_SLOT_COLOR.to_string(),
        }
    }
}

// Shape check only: "UTC" or "Area/Location[/Sub]" with the characters the
// tz database uses.
fn is_iana_like(name: &str) -> bool {
    if name == "UTC" {
        return true;
    }
    let parts: Vec<&str> = name.split('/').collect();
    parts.len() >= 2
        && parts.iter().all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
        })
}
