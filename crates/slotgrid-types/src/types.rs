//! Core types for availability slots.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, PayloadResult};

/// Timestamp format written to the payload. No zone suffix: the server reads
/// the value as wall-clock time in the event's own time zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format used by `datetime-local` input widgets.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Identifier of a slot.
///
/// Slots loaded from the server carry the server's opaque id. Slots created
/// in the editor get a pending id from a per-editor counter until the form is
/// saved; they are written to the payload with an empty id so the server
/// knows to create them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SlotId {
    /// Id assigned by the server.
    Persisted(String),
    /// Locally generated placeholder.
    Pending(u64),
}

impl SlotId {
    /// Create a persisted id.
    pub fn persisted(id: impl Into<String>) -> Self {
        Self::Persisted(id.into())
    }

    /// Whether the slot has not been saved yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, SlotId::Pending(_))
    }

    /// Value written to the `id` field of the payload.
    pub fn wire_value(&self) -> &str {
        match self {
            SlotId::Persisted(id) => id,
            SlotId::Pending(_) => "",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Persisted(id) => write!(f, "{}", id),
            SlotId::Pending(n) => write!(f, "new{}", n),
        }
    }
}

/// A single availability interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot identifier, unique within one editor.
    pub id: SlotId,
    /// Inclusive start, wall-clock time in the editor time zone.
    pub start: NaiveDateTime,
    /// Exclusive end, wall-clock time in the editor time zone.
    pub end: NaiveDateTime,
    /// True iff both start and end fall on local midnight.
    #[serde(rename = "allDay")]
    pub all_day: bool,
}

impl Slot {
    /// Create a slot, deriving the all-day flag from the timestamps.
    ///
    /// Callers are responsible for `start < end`.
    pub fn new(id: SlotId, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id,
            start,
            end,
            all_day: is_local_midnight(&start) && is_local_midnight(&end),
        }
    }

    /// Slots carry no text content.
    pub fn title(&self) -> &str {
        ""
    }
}

/// Whether the wall-clock time is exactly 00:00:00.
pub fn is_local_midnight(timestamp: &NaiveDateTime) -> bool {
    timestamp.time() == NaiveTime::MIN
}

/// Parse a local timestamp.
///
/// Accepts minute or second precision, optional fractional seconds, a space
/// or `T` separator, and an optional `Z` or numeric offset. An offset is
/// dropped and the wall-clock part kept.
pub fn parse_local_timestamp(value: &str) -> PayloadResult<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(zoned.naive_local());
    }
    if let Some(zoned) = ZONED_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(zoned.naive_local());
    }

    let naive = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .ok_or_else(|| PayloadError::invalid_timestamp(value))
}

/// Format a timestamp for the payload.
pub fn format_local_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a timestamp for a `datetime-local` input widget.
pub fn format_input_value(timestamp: &NaiveDateTime) -> String {
    timestamp.format(INPUT_FORMAT).to_string()
}
