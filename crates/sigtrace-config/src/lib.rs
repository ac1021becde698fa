//! sigtrace configuration management
//!
//! This crate provides configuration loading and parsing for the decoding engine:
//! - TOML configuration file parsing
//! - Engine configuration structures

pub mod engine_config;
pub mod toml_config;

pub use engine_config::*;
pub use toml_config::*;
