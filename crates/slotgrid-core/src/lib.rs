//! Core of the slotgrid availability editor.
//!
//! An editor turns a calendar time grid into an input for a set of
//! availability intervals and keeps a hidden form field in sync with it.
//!
//! # Architecture Overview
//!
//! - **Model**: the ordered slot set of one editor and its wire codec
//! - **Deletion arbiter**: the two-click deletion gesture as a pure state machine
//! - **Controller**: routes grid gestures to the model and writes the field back
//! - **Manual entry**: start/end inputs feeding the same creation path
//! - **Setup**: one independent editor per marked field on a page
//! - **Availability**: span algebra used when checking submitted availabilities
//! - **Submission**: server-side cleaning and clamping of a submitted value
//! - **Configuration**: YAML and builder based editor configuration
//!
//! Rendering and the form field stay behind the [`GridRenderer`] and
//! [`DataField`] traits.

pub mod arbiter;
pub mod availability;
pub mod config;
pub mod controller;
pub mod errors;
pub mod grid;
pub mod manual_entry;
pub mod model;
pub mod setup;
pub mod submission;

pub use arbiter::{ArbiterEffect, DeletionState};
pub use availability::{is_event_covered, Span, SpanError};
pub use config::*;
pub use controller::{EditorController, GestureOutcome};
pub use errors::EditorError;
pub use grid::{DataField, DataFieldBox, GridRenderer, GridRendererBox, EDITOR_FIELD_CLASS};
pub use manual_entry::{InputBounds, ManualEntryForm};
pub use model::IntervalModel;
pub use setup::create_editors;
pub use submission::{SubmissionCleaner, SubmissionError};

#[cfg(test)]
pub mod test_utils;
