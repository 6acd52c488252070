//! Domain layer containing the tracking data model and core logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`timeline`] - Presentation-status derivation for timeline entries
//! - [`lookup_event`] - Lookup request log event model
//! - [`lookup_worker`] - Asynchronous lookup log worker
//!
//! # Lookup logging flow
//!
//! 1. Track handler validates the tracking number
//! 2. A [`lookup_event::LookupEvent`] is sent to a bounded channel
//! 3. [`lookup_worker::run_lookup_worker`] persists events with retry
//! 4. Failures are swallowed; the lookup response is never affected

pub mod entities;
pub mod lookup_event;
pub mod lookup_worker;
pub mod repositories;
pub mod timeline;
