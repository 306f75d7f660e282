//! Backend test support utilities
//!
//! Shared logging initialization and error-envelope assertions for the
//! backend's unit and integration tests.

pub mod error_envelope;
pub mod logging;
