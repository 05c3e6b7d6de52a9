//! Two-click deletion gesture
//!
//! A first click on a slot arms it as a deletion candidate; a second click on
//! the same slot deletes it. Clicking another slot moves the candidate mark,
//! and starting a new slot disarms. At most one slot is armed at any time.
//!
//! Transitions are pure: they consume the current state and return the next
//! one together with the effects the controller has to carry out.

use slotgrid_types::SlotId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    ArmedFor(SlotId),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArbiterEffect {
    /// Show the deletion-candidate marker on the slot.
    Decorate(SlotId),
    /// Remove the marker from the slot.
    ClearDecoration(SlotId),
    /// Delete the slot.
    Remove(SlotId),
}

impl DeletionState {
    pub fn on_click(self, clicked: SlotId) -> (DeletionState, Vec<ArbiterEffect>) {
        match self {
            DeletionState::Idle => (
                DeletionState::ArmedFor(clicked.clone()),
                vec![ArbiterEffect::Decorate(clicked)],
            ),
            DeletionState::ArmedFor(armed) if armed == clicked => {
                (DeletionState::Idle, vec![ArbiterEffect::Remove(armed)])
            }
            DeletionState::ArmedFor(armed) => (
                DeletionState::ArmedFor(clicked.clone()),
                vec![
                    ArbiterEffect::ClearDecoration(armed),
                    ArbiterEffect::Decorate(clicked),
                ],
            ),
        }
    }

    /// Drop any pending candidate, e.g. before a new slot is created.
    pub fn disarm(self) -> (DeletionState, Vec<ArbiterEffect>) {
        match self {
            DeletionState::Idle => (DeletionState::Idle, Vec::new()),
            DeletionState::ArmedFor(armed) => (
                DeletionState::Idle,
                vec![ArbiterEffect::ClearDecoration(armed)],
            ),
        }
    }

    pub fn armed(&self) -> Option<&SlotId> {
        match self {
            DeletionState::Idle => None,
            DeletionState::ArmedFor(id) => Some(id),
        }
    }

    pub fn is_armed_for(&self, id: &SlotId) -> bool {
        self.armed() == Some(id)
    }
}
