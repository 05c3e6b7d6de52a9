//! Start/end inputs next to the grid
//!
//! The form is a thin adapter: it parses the two `datetime-local` values and
//! hands them unchanged to the same creation path drag-select uses. Values are
//! not reordered, clamped or snapped; the widgets' `min`/`max` attributes keep
//! them inside the visible range.

use chrono::NaiveDateTime;
use slotgrid_types::{format_input_value, parse_local_timestamp, VisibleRange};

use crate::controller::{EditorController, GestureOutcome};
use crate::errors::EditorError;

/// `min` and `max` attribute values for both inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBounds {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone)]
pub struct ManualEntryForm {
    start: String,
    end: String,
    range: VisibleRange,
    default_prevented: bool,
}

impl ManualEntryForm {
    pub fn new(range: VisibleRange) -> Self {
        Self {
            start: String::new(),
            end: String::new(),
            range,
            default_prevented: false,
        }
    }

    pub fn bounds(&self) -> InputBounds {
        InputBounds {
            min: format_input_value(&self.range.start),
            max: format_input_value(&self.range.end),
        }
    }

    pub fn set_start(&mut self, value: impl Into<String>) {
        self.start = value.into();
    }

    pub fn set_end(&mut self, value: impl Into<String>) {
        self.end = value.into();
    }

    pub fn start_value(&self) -> &str {
        &self.start
    }

    pub fn end_value(&self) -> &str {
        &self.end
    }

    /// Whether the page's own form submission has to be suppressed. Set by
    /// every `submit`, whatever its result.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Submit the current values to `controller`.
    ///
    /// Any armed deletion is cleared before the values are parsed. Inputs are
    /// cleared once a slot has been created.
    pub fn submit(
        &mut self,
        controller: &mut EditorController,
    ) -> Result<GestureOutcome, EditorError> {
        self.default_prevented = true;
        controller.begin_creation()?;
        let (start, end) = Self::parse_request(&self.start, &self.end)?;
        let outcome = controller.on_range_selected(start, end)?;
        self.start.clear();
        self.end.clear();
        Ok(outcome)
    }

    /// Parse raw input values into a creation request.
    pub fn parse_request(
        start: &str,
        end: &str,
    ) -> Result<(NaiveDateTime, NaiveDateTime), EditorError> {
        let parse = |value: &str| {
            parse_local_timestamp(value)
                .map_err(|_| EditorError::InvalidInput(format!("'{}' is not a date and time", value)))
        };
        Ok((parse(start)?, parse(end)?))
    }
}
