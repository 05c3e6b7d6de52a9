//! Set operations on availability spans
//!
//! A span is a half-open wall-clock interval. Besides the overlap test used by
//! the editor before creating a slot, this module provides the operations the
//! scheduling side needs on submitted availabilities: merging, intersecting,
//! computing the minimal union of a list and checking whether a list covers a
//! given span or a whole event.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use slotgrid_types::{is_local_midnight, Slot, VisibleRange};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpanError {
    #[error("Span ends before it starts: {start} .. {end}")]
    Inverted {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Only overlapping spans can be combined")]
    Disjoint,
}

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Span {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, SpanError> {
        if start >= end {
            return Err(SpanError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The bookable frame of an event held from `first_day` through
    /// `last_day`, i.e. up to midnight after the last day.
    pub fn event_frame(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        let range = VisibleRange::from_dates(first_day, last_day);
        Self {
            start: range.start,
            end: range.end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the span covers whole days only.
    pub fn all_day(&self) -> bool {
        is_local_midnight(&self.start) && is_local_midnight(&self.end)
    }

    /// Overlap test. With `strict` set, spans that merely touch do not count.
    pub fn overlaps(&self, other: &Span, strict: bool) -> bool {
        if strict {
            self.start < other.end && other.start < self.end
        } else {
            self.start <= other.end && other.start <= self.end
        }
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Smallest span covering both. Touching spans may be merged.
    pub fn merge_with(&self, other: &Span) -> Result<Span, SpanError> {
        if !self.overlaps(other, false) {
            return Err(SpanError::Disjoint);
        }
        Ok(Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Time covered by both. Requires a real overlap, so the result is never empty.
    pub fn intersect_with(&self, other: &Span) -> Result<Span, SpanError> {
        if !self.overlaps(other, true) {
            return Err(SpanError::Disjoint);
        }
        Ok(Span {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Minimal sorted list of spans covering the same time as `spans`.
    pub fn union(spans: impl IntoIterator<Item = Span>) -> Vec<Span> {
        let mut sorted: Vec<Span> = spans.into_iter().collect();
        sorted.sort_by_key(|span| (span.start, span.end));

        let mut result: Vec<Span> = Vec::with_capacity(sorted.len());
        for span in sorted {
            match result.last_mut() {
                Some(last) if last.overlaps(&span, false) => {
                    last.end = last.end.max(span.end);
                }
                _ => result.push(span),
            }
        }
        result
    }

    /// Time covered by every one of the given sets.
    pub fn intersection(sets: &[Vec<Span>]) -> Vec<Span> {
        let unioned: Vec<Vec<Span>> = sets.iter().map(|set| Span::union(set.iter().copied())).collect();

        if unioned.is_empty() || unioned.iter().any(|set| set.is_empty()) {
            return Vec::new();
        }

        let mut result = unioned[0].clone();
        for set in &unioned[1..] {
            // Both sides are small (one person's week at most), quadratic is fine.
            result = result
                .iter()
                .flat_map(|a| set.iter().filter_map(move |b| a.intersect_with(b).ok()))
                .collect();
        }
        result
    }

    /// Whether the given spans together cover this span without gaps.
    pub fn is_covered(&self, spans: &[Span]) -> bool {
        Span::union(spans.iter().copied())
            .iter()
            .any(|span| span.contains(self))
    }
}

impl From<&Slot> for Span {
    fn from(slot: &Slot) -> Self {
        Self {
            start: slot.start,
            end: slot.end,
        }
    }
}

/// Whether the spans cover the event from the start of `first_day` up to the
/// start of `last_day`.
pub fn is_event_covered(first_day: NaiveDate, last_day: NaiveDate, spans: &[Span]) -> bool {
    let event = Span {
        start: first_day.and_time(NaiveTime::MIN),
        end: last_day.and_time(NaiveTime::MIN),
    };
    event.is_covered(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn span(day: u32, from: u32, to: u32) -> Span {
        Span::new(at(day, from), at(day, to)).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_and_inverted() {
        assert!(matches!(
            Span::new(at(10, 9), at(10, 9)),
            Err(SpanError::Inverted { .. })
        ));
        assert!(Span::new(at(10, 10), at(10, 9)).is_err());
    }

    #[test]
    fn test_strict_overlap_ignores_adjacency() {
        let morning = span(10, 9, 12);
        let afternoon = span(10, 12, 15);
        let lunch = span(10, 11, 13);

        assert!(!morning.overlaps(&afternoon, true));
        assert!(morning.overlaps(&afternoon, false));
        assert!(morning.overlaps(&lunch, true));
        assert!(lunch.overlaps(&morning, true));
    }

    #[test]
    fn test_merge_and_intersect() {
        let a = span(10, 9, 12);
        let b = span(10, 11, 14);

        assert_eq!(a.merge_with(&b).unwrap(), span(10, 9, 14));
        assert_eq!(a.intersect_with(&b).unwrap(), span(10, 11, 12));

        let far = span(10, 16, 17);
        assert_eq!(a.merge_with(&far), Err(SpanError::Disjoint));
        assert_eq!(a.intersect_with(&far), Err(SpanError::Disjoint));
        assert_eq!(a.intersect_with(&span(10, 12, 13)), Err(SpanError::Disjoint));
    }

    #[test]
    fn test_union_merges_touching_and_overlapping() {
        let union = Span::union(vec![
            span(10, 14, 16),
            span(10, 9, 11),
            span(10, 10, 12),
            span(10, 12, 13),
            span(11, 9, 10),
        ]);

        assert_eq!(union, vec![span(10, 9, 13), span(10, 14, 16), span(11, 9, 10)]);
        assert!(Span::union(Vec::new()).is_empty());
    }

    #[test]
    fn test_intersection_of_sets() {
        let person = vec![span(10, 9, 12), span(10, 14, 18)];
        let room = vec![span(10, 8, 10), span(10, 11, 15)];
        let ak = vec![span(10, 0, 23)];

        let common = Span::intersection(&[person.clone(), room, ak]);
        assert_eq!(common, vec![span(10, 9, 10), span(10, 11, 12), span(10, 14, 15)]);

        assert!(Span::intersection(&[]).is_empty());
        assert!(Span::intersection(&[person, Vec::new()]).is_empty());
    }

    #[test]
    fn test_coverage() {
        let target = span(10, 9, 17);
        assert!(target.is_covered(&[span(10, 12, 17), span(10, 8, 12)]));
        assert!(!target.is_covered(&[span(10, 9, 12), span(10, 13, 17)]));

        let first = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        let whole = Span::new(at(10, 0), at(12, 0)).unwrap();
        assert!(is_event_covered(first, last, &[whole]));
        assert!(!is_event_covered(first, last, &[span(10, 0, 23)]));
    }

    #[test]
    fn test_event_frame_and_all_day() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let frame = Span::event_frame(first, first);

        assert_eq!(frame.duration(), Duration::days(1));
        assert!(frame.all_day());
        assert!(!span(10, 9, 17).all_day());
    }
}
