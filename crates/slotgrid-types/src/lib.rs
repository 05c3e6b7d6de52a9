//! Type definitions shared between the availability editor and its host
//!
//! This crate holds the contract between the editor core, the calendar grid
//! that renders it and the server that consumes the hidden form field: slot
//! identifiers and slots, the timestamp codec, the payload wire format, and
//! the events and commands exchanged with the grid.
//!
//! ## Example
//!
//! ```rust
//! use slotgrid_types::{AvailabilityPayload, SlotId};
//!
//! let payload = AvailabilityPayload::from_json(
//!     r#"{"availabilities":[{"id":"abc","start":"2024-01-10T09:00:00","end":"2024-01-10T17:00:00","allDay":false}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(payload.availabilities[0].persisted_id(), Some("abc"));
//! assert_eq!(SlotId::Pending(0).wire_value(), "");
//! ```

pub mod error;
pub mod events;
pub mod grid;
pub mod payload;
pub mod types;

pub use error::*;
pub use events::*;
pub use grid::*;
pub use payload::*;
pub use types::*;
