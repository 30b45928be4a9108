//! HandMove Frame Model
//!
//! Defines the data contracts around the movement classifier:
//! - **Frames:** Per-frame hand rectangle summary and landmark list
//! - **Labels:** Scroll, zoom, and slide labels plus the per-frame output record
//! - **Synthetic:** Generated hand poses and gesture sequences for tests and demos
//!
//! All coordinates are normalized to `[0.0, 1.0]` range relative to the
//! camera frame.

pub mod frame;
pub mod labels;
pub mod synthetic;

pub use frame::*;
pub use labels::*;
