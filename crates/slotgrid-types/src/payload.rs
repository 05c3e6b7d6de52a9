//! Wire format of the hidden form field.
//!
//! The field holds a JSON object with a single `availabilities` list. The
//! server renders it on page load (possibly with extra keys such as an
//! `event` block, which are ignored here) and reads it back on form
//! submission. Entries without a server id are created by the server.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PayloadError, PayloadResult};
use crate::types::{format_local_timestamp, parse_local_timestamp, Slot};

/// The full field value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailabilityPayload {
    /// All slots of the editor, in display order.
    pub availabilities: Vec<PayloadEntry>,
}

/// One slot as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadEntry {
    /// Server id, empty for slots not saved yet.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    /// Local timestamp without zone suffix.
    pub start: String,
    /// Local timestamp without zone suffix.
    pub end: String,
    /// All-day flag. Informational on read; recomputed by the editor.
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

// The server serializes its primary keys as numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WireId>::deserialize(deserializer)?.map(|id| match id {
        WireId::Text(text) => text,
        WireId::Number(number) => number.to_string(),
    }))
}

impl AvailabilityPayload {
    /// Parse a field value.
    pub fn from_json(raw: &str) -> PayloadResult<Self> {
        serde_json::from_str(raw).map_err(|e| PayloadError::malformed(e.to_string()))
    }

    /// Render the field value.
    pub fn to_json(&self) -> PayloadResult<String> {
        serde_json::to_string(self).map_err(|e| PayloadError::serialization(e.to_string()))
    }

    /// Build a payload snapshot from slots.
    pub fn from_slots<'a>(slots: impl IntoIterator<Item = &'a Slot>) -> Self {
        Self {
            availabilities: slots.into_iter().map(PayloadEntry::from_slot).collect(),
        }
    }
}

impl PayloadEntry {
    /// Wire representation of a slot. Pending ids become the empty string.
    pub fn from_slot(slot: &Slot) -> Self {
        Self {
            id: Some(slot.id.wire_value().to_string()),
            start: format_local_timestamp(&slot.start),
            end: format_local_timestamp(&slot.end),
            all_day: slot.all_day,
        }
    }

    /// The server id, if the entry has a non-empty one.
    pub fn persisted_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Parse start and end, requiring `start < end`.
    pub fn parse_range(&self) -> PayloadResult<(NaiveDateTime, NaiveDateTime)> {
        let start = parse_local_timestamp(&self.start)?;
        let end = parse_local_timestamp(&self.end)?;
        if start >= end {
            return Err(PayloadError::malformed(format!(
                "entry ends before it starts: {} .. {}",
                self.start, self.end
            )));
        }
        Ok((start, end))
    }
}
