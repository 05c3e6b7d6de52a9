//! Editor controller wiring gestures to the model
//!
//! The controller is the only piece that talks to the grid and to the hidden
//! field. Every successful mutation ends with exactly one write of the full
//! serialized model to the field; the field is read once, at construction.

use chrono::NaiveDateTime;
use slotgrid_types::{GridCommand, GridEvent, SlotId, SlotMarker, VisibleRange};

use crate::arbiter::{ArbiterEffect, DeletionState};
use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::grid::{DataFieldBox, GridRendererBox};
use crate::manual_entry::ManualEntryForm;
use crate::model::IntervalModel;

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

/// Visible result of a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    Created(SlotId),
    Armed(SlotId),
    Deleted(SlotId),
    /// The model was replaced by the grid's slot set, holding this many slots.
    Replaced(usize),
    Unchanged,
}

pub struct EditorController {
    name: String,
    model: IntervalModel,
    deletion: DeletionState,
    renderer: GridRendererBox,
    field: DataFieldBox,
    editable: bool,
    visible_range: VisibleRange,
}

impl EditorController {
    /// Build an editor for one field and mount its grid.
    ///
    /// A field value that cannot be parsed is logged and replaced by an empty
    /// slot set so the rest of the page stays usable.
    pub fn new(config: &EditorConfig, field: DataFieldBox, mut renderer: GridRendererBox) -> Self {
        let name = field.name();
        let editable = !field.is_disabled();

        let model = match IntervalModel::load(&field.value()) {
            Ok(model) => model,
            Err(err) => {
                log::warn!(
                    "Availability field '{}' could not be loaded, starting empty: {}",
                    name,
                    err
                );
                IntervalModel::new()
            }
        };

        renderer.mount(&config.grid_options(editable), model.slots());

        log::info!(
            "Availability editor '{}' ready with {} slot(s){}",
            name,
            model.len(),
            if editable { "" } else { " (read-only)" }
        );

        Self {
            name,
            model,
            deletion: DeletionState::Idle,
            renderer,
            field,
            editable,
            visible_range: config.visible_range(),
        }
    }

    /// Route a grid notification. Rejections are logged and swallowed.
    pub fn dispatch(&mut self, event: GridEvent) -> GestureOutcome {
        let result = match event {
            GridEvent::RangeSelected { start, end } => self.on_range_selected(start, end),
            GridEvent::SlotClicked { id } => self.on_slot_clicked(&id),
            GridEvent::SlotsChanged => self.on_external_change(),
            GridEvent::ManualEntrySubmitted { start, end } => self
                .begin_creation()
                .and_then(|_| ManualEntryForm::parse_request(&start, &end))
                .and_then(|(start, end)| self.on_range_selected(start, end)),
        };

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("Editor '{}' ignored gesture: {}", self.name, err);
                GestureOutcome::Unchanged
            }
        }
    }

    /// Start of every creation gesture: clears a pending deletion before the
    /// request is parsed or checked.
    pub fn begin_creation(&mut self) -> Result<(), EditorError> {
        self.ensure_editable()?;
        self.disarm();
        Ok(())
    }

    /// Create a slot from a drag-select or a manual entry.
    pub fn on_range_selected(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<GestureOutcome, EditorError> {
        self.begin_creation()?;

        if start >= end {
            return Err(EditorError::InvalidRange { start, end });
        }
        if let Some(existing) = self.model.find_overlap(start, end) {
            return Err(EditorError::OverlapConflict {
                start,
                end,
                existing: existing.id.clone(),
            });
        }

        let slot = self.model.add(start, end)?;
        let id = slot.id.clone();
        self.renderer.apply(GridCommand::AddSlot { slot });
        self.write_field()?;

        log::debug!("Editor '{}' created slot {}", self.name, id);
        Ok(GestureOutcome::Created(id))
    }

    /// Advance the two-click deletion gesture.
    pub fn on_slot_clicked(&mut self, id: &SlotId) -> Result<GestureOutcome, EditorError> {
        self.ensure_editable()?;
        if !self.model.contains(id) {
            return Err(EditorError::NotFound(id.clone()));
        }

        let (next, effects) = std::mem::take(&mut self.deletion).on_click(id.clone());
        self.deletion = next;
        self.run_effects(effects)
    }

    /// Take over the grid's slot set after a native move or resize.
    pub fn on_external_change(&mut self) -> Result<GestureOutcome, EditorError> {
        self.ensure_editable()?;

        self.model.replace_all(self.renderer.rendered_slots())?;
        if let Some(armed) = self.deletion.armed() {
            if !self.model.contains(armed) {
                self.deletion = DeletionState::Idle;
            }
        }
        self.write_field()?;

        Ok(GestureOutcome::Replaced(self.model.len()))
    }

    /// A manual entry form bounded to this editor's visible range.
    pub fn manual_entry_form(&self) -> ManualEntryForm {
        ManualEntryForm::new(self.visible_range)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &IntervalModel {
        &self.model
    }

    pub fn deletion_state(&self) -> &DeletionState {
        &self.deletion
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    fn ensure_editable(&self) -> Result<(), EditorError> {
        if self.editable {
            Ok(())
        } else {
            Err(EditorError::ReadOnly)
        }
    }

    fn disarm(&mut self) {
        let (next, effects) = std::mem::take(&mut self.deletion).disarm();
        self.deletion = next;
        for effect in effects {
            if let ArbiterEffect::ClearDecoration(id) = effect {
                self.renderer.apply(GridCommand::ClearDecoration { id });
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<ArbiterEffect>) -> Result<GestureOutcome, EditorError> {
        let mut outcome = GestureOutcome::Unchanged;

        for effect in effects {
            match effect {
                ArbiterEffect::Decorate(id) => {
                    self.renderer.apply(GridCommand::Decorate {
                        id: id.clone(),
                        marker: SlotMarker::DeletionCandidate,
                    });
                    outcome = GestureOutcome::Armed(id);
                }
                ArbiterEffect::ClearDecoration(id) => {
                    self.renderer.apply(GridCommand::ClearDecoration { id });
                }
                ArbiterEffect::Remove(id) => {
                    self.model.remove(&id)?;
                    self.renderer.apply(GridCommand::RemoveSlot { id: id.clone() });
                    self.write_field()?;
                    log::debug!("Editor '{}' deleted slot {}", self.name, id);
                    outcome = GestureOutcome::Deleted(id);
                }
            }
        }

        Ok(outcome)
    }

    fn write_field(&mut self) -> Result<(), EditorError> {
        let raw = self.model.serialize()?;
        self.field.set_value(&raw);
        Ok(())
    }
}
