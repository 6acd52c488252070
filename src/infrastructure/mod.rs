//! Infrastructure layer: database access implementations.

pub mod persistence;
