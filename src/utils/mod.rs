//! Utility types shared across the application.
//!
//! - [`tracking_number`] - Tracking number parsing and normalization

pub mod tracking_number;
