//! Notifications emitted by the calendar grid and commands sent back to it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{Slot, SlotId};

/// A user gesture reported by the grid or the manual entry inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// A sub-range was drag-selected.
    RangeSelected {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// A rendered slot was clicked.
    SlotClicked { id: SlotId },
    /// A native move or resize finished; the grid's slot set changed.
    SlotsChanged,
    /// The manual entry form was submitted with raw input values.
    ManualEntrySubmitted { start: String, end: String },
}

/// Visual marker that can be attached to a rendered slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotMarker {
    /// Trash/question icon shown on a slot awaiting a confirming click.
    DeletionCandidate,
}

/// Imperative request to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum GridCommand {
    /// Render a new slot.
    AddSlot { slot: Slot },
    /// Remove a rendered slot.
    RemoveSlot { id: SlotId },
    /// Attach a marker to a rendered slot.
    Decorate { id: SlotId, marker: SlotMarker },
    /// Remove any marker from a rendered slot.
    ClearDecoration { id: SlotId },
}

impl GridCommand {
    /// The slot the command targets.
    pub fn target(&self) -> &SlotId {
        match self {
            GridCommand::AddSlot { slot } => &slot.id,
            GridCommand::RemoveSlot { id } => id,
            GridCommand::Decorate { id, .. } => id,
            GridCommand::ClearDecoration { id } => id,
        }
    }
}
