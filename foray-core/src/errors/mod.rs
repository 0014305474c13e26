//! Error enums for fallible engine surfaces.
//!
//! The prediction query itself reports failure through its structured
//! result (`success = false`), so the enums here cover the genuinely
//! fallible surfaces: configuration loading and validation.

pub mod config_error;

pub use config_error::ConfigError;
