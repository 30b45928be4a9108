//! HandMove Common Utilities
//!
//! Shared infrastructure for all HandMove crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading, including classifier thresholds

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
