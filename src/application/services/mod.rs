//! Business logic services for the application layer.

pub mod tracking_service;

pub use tracking_service::{TrackingReport, TrackingService};
