//! Capabilities an editor is wired to: the calendar grid that renders it and
//! the hidden form field that carries its value.

use slotgrid_types::{GridCommand, GridOptions, Slot};

/// CSS class marking the input fields that get an editor.
pub const EDITOR_FIELD_CLASS: &str = "availabilities-editor-data";

/// Time-grid widget rendering one editor.
///
/// The widget reports gestures back as [`slotgrid_types::GridEvent`]s. It is
/// expected to refuse overlapping selections and placements itself when the
/// options ask for it; the editor re-checks regardless.
pub trait GridRenderer {
    /// Render the visible range with the initial slots.
    fn mount(&mut self, options: &GridOptions, slots: &[Slot]);
    fn apply(&mut self, command: GridCommand);
    /// Slots as currently displayed, after any native move or resize.
    fn rendered_slots(&self) -> Vec<Slot>;
}

pub type GridRendererBox = Box<dyn GridRenderer>;

/// Hidden input holding the serialized slot set.
pub trait DataField {
    fn name(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
    fn is_disabled(&self) -> bool;
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
}

pub type DataFieldBox = Box<dyn DataField>;
