//! The canonical set of slots owned by one editor
//!
//! The model is the single source of truth for an editor; the hidden form
//! field is only ever a serialized snapshot of it. Slots keep insertion
//! order, which is also the order they are written back to the field.

use chrono::NaiveDateTime;
use slotgrid_types::{AvailabilityPayload, Slot, SlotId};
use std::collections::HashSet;

use crate::availability::Span;
use crate::errors::EditorError;

#[derive(Debug, Clone, Default)]
pub struct IntervalModel {
    slots: Vec<Slot>,
    next_pending: u64,
}

impl IntervalModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a field value into a model.
    ///
    /// Entries without a server id get a fresh pending id. The incoming
    /// `allDay` flag is ignored and recomputed from the timestamps.
    pub fn load(raw: &str) -> Result<Self, EditorError> {
        let payload = AvailabilityPayload::from_json(raw)?;
        let mut model = Self::new();

        for entry in &payload.availabilities {
            let (start, end) = entry.parse_range()?;
            let id = match entry.persisted_id() {
                Some(id) => SlotId::persisted(id),
                None => model.next_pending_id(),
            };
            if model.contains(&id) {
                return Err(EditorError::MalformedPayload(format!(
                    "duplicate slot id '{}'",
                    id
                )));
            }
            model.slots.push(Slot::new(id, start, end));
        }

        Ok(model)
    }

    /// Append a new slot with a pending id.
    ///
    /// Overlap is not checked here; callers decide whether a range may be
    /// created.
    pub fn add(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Slot, EditorError> {
        if start >= end {
            return Err(EditorError::InvalidRange { start, end });
        }
        let slot = Slot::new(self.next_pending_id(), start, end);
        self.slots.push(slot.clone());
        Ok(slot)
    }

    pub fn remove(&mut self, id: &SlotId) -> Result<Slot, EditorError> {
        let index = self
            .slots
            .iter()
            .position(|slot| &slot.id == id)
            .ok_or_else(|| EditorError::NotFound(id.clone()))?;
        Ok(self.slots.remove(index))
    }

    /// Replace the whole slot set, keeping the given ids.
    ///
    /// Nothing changes if any slot is inverted or an id repeats.
    pub fn replace_all(&mut self, slots: Vec<Slot>) -> Result<(), EditorError> {
        let mut seen = HashSet::with_capacity(slots.len());
        for slot in &slots {
            if slot.start >= slot.end {
                return Err(EditorError::InvalidRange {
                    start: slot.start,
                    end: slot.end,
                });
            }
            if !seen.insert(&slot.id) {
                return Err(EditorError::InvalidInput(format!(
                    "duplicate slot id '{}'",
                    slot.id
                )));
            }
        }

        // Keep the counter ahead of any pending id handed back to us.
        let highest_pending = slots
            .iter()
            .filter_map(|slot| match slot.id {
                SlotId::Pending(n) => Some(n.saturating_add(1)),
                SlotId::Persisted(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.next_pending = self.next_pending.max(highest_pending);

        self.slots = slots
            .into_iter()
            .map(|slot| Slot::new(slot.id, slot.start, slot.end))
            .collect();
        Ok(())
    }

    /// First slot that really overlaps `[start, end)`. Touching slots do not count.
    pub fn find_overlap(&self, start: NaiveDateTime, end: NaiveDateTime) -> Option<&Slot> {
        let candidate = Span { start, end };
        self.slots
            .iter()
            .find(|slot| Span::from(*slot).overlaps(&candidate, true))
    }

    pub fn get(&self, id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| &slot.id == id)
    }

    pub fn contains(&self, id: &SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn to_payload(&self) -> AvailabilityPayload {
        AvailabilityPayload::from_slots(&self.slots)
    }

    /// Render the full snapshot written to the hidden field.
    pub fn serialize(&self) -> Result<String, EditorError> {
        Ok(self.to_payload().to_json()?)
    }

    fn next_pending_id(&mut self) -> SlotId {
        let id = SlotId::Pending(self.next_pending);
        self.next_pending = self.next_pending.saturating_add(1);
        id
    }
}
