//! Foray core — shared infrastructure for the attack-path prediction engine.
//!
//! Holds the pieces every other crate leans on: constants, error enums,
//! configuration, performance-oriented collection aliases, and tracing
//! initialization. No graph logic lives here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::EngineConfig;
pub use errors::ConfigError;
