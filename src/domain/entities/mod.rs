//! Core domain entities representing the tracking data model.
//!
//! Entities are plain data structures without business logic. Both are created
//! by external operator tooling; this service only reads them.
//!
//! - [`Shipment`] - A tracked consignment with its current status
//! - [`StatusEvent`] - One entry in a shipment's status history

pub mod shipment;
pub mod status_event;

pub use shipment::Shipment;
pub use status_event::StatusEvent;
