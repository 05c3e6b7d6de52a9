//! Server-side cleaning of a submitted field value
//!
//! The hidden field travels back to the server as free text. Before it is
//! stored it is checked against the expected shape and every entry is clamped
//! to the event's frame, so a slot dragged past the last day ends at midnight
//! after it.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use slotgrid_types::parse_local_timestamp;
use thiserror::Error;

use crate::availability::Span;
use crate::config::EditorConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Availabilities are required")]
    Required,
    #[error("Submitted availabilities are not valid JSON: {0}")]
    InvalidJson(String),
    #[error("Submitted availabilities must be a JSON object")]
    NotAnObject,
    #[error("Submitted object has no 'availabilities' list")]
    MissingAvailabilities,
    #[error("Availability entry {index} is not an object with exactly 'start' and 'end'")]
    InvalidFormat { index: usize },
    #[error("Availability entry {index} has an invalid date: {value}")]
    InvalidDate { index: usize, value: String },
}

#[derive(Debug, Clone)]
pub struct SubmissionCleaner {
    frame: Span,
    required: bool,
}

impl SubmissionCleaner {
    pub fn new(frame: Span, required: bool) -> Self {
        Self { frame, required }
    }

    pub fn for_event(config: &EditorConfig, required: bool) -> Self {
        Self::new(config.event_frame(), required)
    }

    pub fn frame(&self) -> Span {
        self.frame
    }

    /// Validate `raw` and return the clamped spans.
    ///
    /// An empty value on an optional field yields `Ok(None)`, meaning "leave
    /// the stored availabilities alone". Entries lying completely outside the
    /// frame are dropped.
    pub fn clean(&self, raw: &str) -> Result<Option<Vec<Span>>, SubmissionError> {
        if raw.trim().is_empty() {
            return if self.required {
                Err(SubmissionError::Required)
            } else {
                Ok(None)
            };
        }

        let value: Value = serde_json::from_str(raw)
            .map_err(|e| SubmissionError::InvalidJson(e.to_string()))?;
        let object = value.as_object().ok_or(SubmissionError::NotAnObject)?;
        let entries = object
            .get("availabilities")
            .and_then(Value::as_array)
            .ok_or(SubmissionError::MissingAvailabilities)?;

        let mut spans = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let (start, end) = Self::parse_entry(index, entry)?;
            match self.clamp(start, end) {
                Some(span) => spans.push(span),
                None => log::debug!(
                    "Dropping availability {} .. {} outside {} .. {}",
                    start,
                    end,
                    self.frame.start,
                    self.frame.end
                ),
            }
        }

        if spans.is_empty() && self.required {
            return Err(SubmissionError::Required);
        }
        Ok(Some(spans))
    }

    fn parse_entry(
        index: usize,
        entry: &Value,
    ) -> Result<(NaiveDateTime, NaiveDateTime), SubmissionError> {
        let object = entry
            .as_object()
            .ok_or(SubmissionError::InvalidFormat { index })?;

        let keys: Vec<&str> = object
            .keys()
            .map(String::as_str)
            .filter(|key| !matches!(*key, "id" | "allDay"))
            .collect();
        if keys.len() != 2 || !keys.contains(&"start") || !keys.contains(&"end") {
            return Err(SubmissionError::InvalidFormat { index });
        }

        Ok((
            Self::timestamp(index, object, "start")?,
            Self::timestamp(index, object, "end")?,
        ))
    }

    fn timestamp(
        index: usize,
        object: &Map<String, Value>,
        key: &str,
    ) -> Result<NaiveDateTime, SubmissionError> {
        let value = &object[key];
        value
            .as_str()
            .and_then(|text| parse_local_timestamp(text).ok())
            .ok_or_else(|| SubmissionError::InvalidDate {
                index,
                value: value.to_string(),
            })
    }

    fn clamp(&self, start: NaiveDateTime, end: NaiveDateTime) -> Option<Span> {
        Span::new(start.max(self.frame.start), end.min(self.frame.end)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn cleaner(required: bool) -> SubmissionCleaner {
        SubmissionCleaner::new(
            Span::event_frame(
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            ),
            required,
        )
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(cleaner(false).clean(""), Ok(None));
        assert_eq!(cleaner(true).clean("  "), Err(SubmissionError::Required));
    }

    #[test]
    fn test_editor_output_is_accepted() {
        let raw = json!({
            "availabilities": [
                {"id": "abc", "start": "2024-01-10T09:00:00", "end": "2024-01-10T17:00:00", "allDay": false},
                {"id": "", "start": "2024-01-11T00:00:00", "end": "2024-01-12T00:00:00", "allDay": true}
            ]
        })
        .to_string();

        let spans = cleaner(true).clean(&raw).unwrap().unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new(at(10, 9), at(10, 17)).unwrap(),
                Span::new(at(11, 0), at(12, 0)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_entries_are_clamped_to_frame() {
        let raw = json!({
            "availabilities": [
                {"start": "2024-01-09T20:00:00", "end": "2024-01-10T10:00:00"},
                {"start": "2024-01-12T20:00:00", "end": "2024-01-14T10:00:00"},
                {"start": "2024-01-20T08:00:00", "end": "2024-01-20T10:00:00"}
            ]
        })
        .to_string();

        let spans = cleaner(false).clean(&raw).unwrap().unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new(at(10, 0), at(10, 10)).unwrap(),
                Span::new(at(12, 20), at(13, 0)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_nothing_left_on_required_field() {
        let raw = json!({"availabilities": []}).to_string();
        assert_eq!(cleaner(false).clean(&raw), Ok(Some(Vec::new())));
        assert_eq!(cleaner(true).clean(&raw), Err(SubmissionError::Required));
    }

    #[test]
    fn test_shape_errors() {
        let c = cleaner(false);

        assert!(matches!(c.clean("{oops"), Err(SubmissionError::InvalidJson(_))));
        assert_eq!(c.clean("[]"), Err(SubmissionError::NotAnObject));
        assert_eq!(c.clean("{}"), Err(SubmissionError::MissingAvailabilities));
        assert_eq!(
            c.clean(r#"{"availabilities": {}}"#),
            Err(SubmissionError::MissingAvailabilities)
        );
        assert_eq!(
            c.clean(r#"{"availabilities": ["2024-01-10"]}"#),
            Err(SubmissionError::InvalidFormat { index: 0 })
        );

        let extra_key = json!({
            "availabilities": [
                {"start": "2024-01-10T09:00:00", "end": "2024-01-10T10:00:00"},
                {"start": "2024-01-10T11:00:00", "end": "2024-01-10T12:00:00", "title": "x"}
            ]
        })
        .to_string();
        assert_eq!(
            c.clean(&extra_key),
            Err(SubmissionError::InvalidFormat { index: 1 })
        );

        let missing_end = json!({"availabilities": [{"start": "2024-01-10T09:00:00"}]}).to_string();
        assert_eq!(
            c.clean(&missing_end),
            Err(SubmissionError::InvalidFormat { index: 0 })
        );
    }

    #[test]
    fn test_invalid_dates() {
        let raw = json!({
            "availabilities": [{"start": "tomorrow", "end": "2024-01-10T10:00:00"}]
        })
        .to_string();
        assert!(matches!(
            cleaner(false).clean(&raw),
            Err(SubmissionError::InvalidDate { index: 0, .. })
        ));

        let raw = json!({"availabilities": [{"start": 5, "end": "2024-01-10T10:00:00"}]}).to_string();
        assert_eq!(
            cleaner(false).clean(&raw),
            Err(SubmissionError::InvalidDate {
                index: 0,
                value: "5".to_string()
            })
        );
    }
}
