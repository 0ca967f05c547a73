//! Utils Module - Shared Utilities

pub mod telemetry;

pub use telemetry::*;
