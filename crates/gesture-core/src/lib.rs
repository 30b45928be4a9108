//! HandMove Gesture Core
//!
//! Turns a stream of hand frames into discrete movement labels:
//! - **Scroll:** direction of whole-hand translation
//! - **Zoom:** hand moving toward or away from the camera
//! - **Slide:** upright hand turning left or right around the wrist
//!
//! This crate is pure computation: no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod classifier;
pub mod geometry;
pub mod scroll;
pub mod slide;
pub mod zoom;

pub use classifier::{ClassifierState, FrameLabels, MovementClassifier};
pub use slide::SlidePhase;
