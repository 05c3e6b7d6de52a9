// src/test_utils/fake_grid.rs
use std::cell::RefCell;
use std::rc::Rc;

use slotgrid_types::{GridCommand, GridOptions, Slot, SlotId, SlotMarker};

use crate::grid::{DataField, GridRenderer, EDITOR_FIELD_CLASS};

#[derive(Debug, Default)]
pub struct FakeGridState {
    pub options: Option<GridOptions>,
    pub slots: Vec<Slot>,
    pub commands: Vec<GridCommand>,
    pub markers: Vec<(SlotId, SlotMarker)>,
}

/// Grid that keeps the displayed slots in memory and records every command.
/// Clones share state, so a test can keep one and box the other.
#[derive(Debug, Clone, Default)]
pub struct FakeGrid {
    pub state: Rc<RefCell<FakeGridState>>,
}

impl FakeGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot_ids(&self) -> Vec<SlotId> {
        self.state.borrow().slots.iter().map(|slot| slot.id.clone()).collect()
    }

    pub fn marked(&self) -> Vec<SlotId> {
        self.state.borrow().markers.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Simulate a native move/resize by overwriting what is displayed.
    pub fn set_displayed(&self, slots: Vec<Slot>) {
        self.state.borrow_mut().slots = slots;
    }
}

impl GridRenderer for FakeGrid {
    fn mount(&mut self, options: &GridOptions, slots: &[Slot]) {
        let mut state = self.state.borrow_mut();
        state.options = Some(options.clone());
        state.slots = slots.to_vec();
    }

    fn apply(&mut self, command: GridCommand) {
        let mut state = self.state.borrow_mut();
        match &command {
            GridCommand::AddSlot { slot } => state.slots.push(slot.clone()),
            GridCommand::RemoveSlot { id } => {
                state.slots.retain(|slot| &slot.id != id);
                state.markers.retain(|(marked, _)| marked != id);
            }
            GridCommand::Decorate { id, marker } => state.markers.push((id.clone(), *marker)),
            GridCommand::ClearDecoration { id } => state.markers.retain(|(marked, _)| marked != id),
        }
        state.commands.push(command);
    }

    fn rendered_slots(&self) -> Vec<Slot> {
        self.state.borrow().slots.clone()
    }
}

#[derive(Debug, Default)]
pub struct FakeFieldState {
    pub value: String,
    pub writes: usize,
}

/// Hidden input recording how often it was written.
#[derive(Debug, Clone)]
pub struct FakeField {
    pub name: String,
    pub classes: Vec<String>,
    pub disabled: bool,
    pub state: Rc<RefCell<FakeFieldState>>,
}

impl FakeField {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            classes: vec![EDITOR_FIELD_CLASS.to_string()],
            disabled: false,
            state: Rc::new(RefCell::new(FakeFieldState {
                value: value.to_string(),
                writes: 0,
            })),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn without_editor_class(mut self) -> Self {
        self.classes.clear();
        self
    }

    pub fn current(&self) -> String {
        self.state.borrow().value.clone()
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl DataField for FakeField {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.value = value.to_string();
        state.writes += 1;
    }
}
