//! Options handed to the calendar grid when an editor is mounted.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Default background colour of rendered slots.
pub const DEFAULT_SLOT_COLOR: &str = "#28B62C";

/// Range rendered by the grid. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl VisibleRange {
    /// Range covering the inclusive date bounds `first_day ..= last_day`.
    pub fn from_dates(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            start: first_day.and_time(NaiveTime::MIN),
            end: (last_day + Duration::days(1)).and_time(NaiveTime::MIN),
        }
    }

    /// Whether the timestamp lies inside the range.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.start <= *timestamp && *timestamp < self.end
    }
}

/// Grid configuration for one editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    /// IANA zone used to display slots.
    pub time_zone: String,
    /// Locale tag for day names and other chrome.
    pub locale: String,
    pub visible_range: VisibleRange,
    /// Gesture snapping step in minutes.
    pub slot_resolution_minutes: u32,
    /// Native move/resize allowed.
    pub editable: bool,
    /// Drag-select allowed.
    pub selectable: bool,
    /// Selections may overlap existing slots.
    pub select_overlap: bool,
    /// Slots may be moved onto other slots.
    pub event_overlap: bool,
    pub all_day_slot: bool,
    pub slot_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_includes_last_day() {
        let range = VisibleRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        );

        let last_evening = NaiveDate::from_ymd_opt(2024, 1, 12)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        assert!(range.contains(&range.start));
        assert!(range.contains(&last_evening));
        assert!(!range.contains(&range.end));
        assert_eq!(range.end.to_string(), "2024-01-13 00:00:00");
    }
}
