//! The per-frame movement classifier.
//!
//! One `MovementClassifier` belongs to one tracked hand. Each call to
//! [`MovementClassifier::process`] reads the frame, compares it with the
//! remembered previous frame, updates that memory and returns three labels.
//!
//! Scroll and zoom run on every frame. Slide runs on every
//! `slide_frame_stride`-th frame (frame indices 0, 2, 4, ... by default) to
//! damp jitter. The three features keep separate state, so a slide failure
//! does not stop scroll and zoom from being reported.

use handmove_common::config::GestureConfig;
use handmove_common::error::{HandmoveError, HandmoveResult};
use handmove_frame_model::frame::{FrameInput, Point2D, TimestampNs};
use handmove_frame_model::labels::{LabelRecord, ScrollLabel, SlideLabel, ZoomLabel};

use crate::scroll::ScrollDetector;
use crate::slide::{SlideDetector, SlidePhase};
use crate::zoom::ZoomDetector;

/// Labels produced for one frame.
#[derive(Debug)]
pub struct FrameLabels {
    /// Zero-based index of the frame within the hand session.
    pub frame_index: u64,
    pub scroll: ScrollLabel,
    pub zoom: ZoomLabel,
    /// `Err` when slide detection ran on this frame and rejected it.
    pub slide: HandmoveResult<SlideLabel>,
}

impl FrameLabels {
    /// Slide label, with a rejected frame reported as no movement.
    pub fn slide_label(&self) -> SlideLabel {
        match &self.slide {
            Ok(label) => *label,
            Err(_) => SlideLabel::None,
        }
    }

    /// Convert to the serializable output record.
    pub fn to_record(&self, t: Option<TimestampNs>) -> LabelRecord {
        LabelRecord {
            frame: self.frame_index,
            t,
            scroll: self.scroll,
            zoom: self.zoom,
            slide: self.slide_label(),
            slide_error: self.slide.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Snapshot of the classifier's memory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierState {
    pub prev_center: Option<Point2D>,
    pub prev_height: Option<f64>,
    pub prev_angle_deg: Option<i32>,
    /// Number of frames accepted so far; also the index of the next frame.
    pub frame_index: u64,
}

impl ClassifierState {
    pub fn has_prev_center(&self) -> bool {
        self.prev_center.is_some()
    }

    pub fn has_prev_height(&self) -> bool {
        self.prev_height.is_some()
    }

    pub fn has_prev_angle(&self) -> bool {
        self.prev_angle_deg.is_some()
    }
}

/// Stateful scroll / zoom / slide classifier for a single hand.
#[derive(Debug, Clone)]
pub struct MovementClassifier {
    config: GestureConfig,
    scroll: ScrollDetector,
    zoom: ZoomDetector,
    slide: SlideDetector,
    frame_index: u64,
}

impl MovementClassifier {
    /// Create a classifier, rejecting unusable thresholds.
    pub fn new(config: GestureConfig) -> HandmoveResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a classifier with the default thresholds.
    pub fn with_defaults() -> Self {
        Self::build(GestureConfig::default())
    }

    fn build(config: GestureConfig) -> Self {
        Self {
            scroll: ScrollDetector::new(config.scroll_distance_factor, config.reference_offset),
            zoom: ZoomDetector::new(config.zoom_height_factor),
            slide: SlideDetector::new(
                config.slide_angle_threshold_deg,
                config.slide_gate_min_deg,
                config.slide_gate_max_deg,
                config.reference_offset,
            ),
            frame_index: 0,
            config,
        }
    }

    /// Classify one frame.
    ///
    /// Fails with `InvalidInput`, leaving all state untouched, when the
    /// landmark list is empty or the rectangle is unusable. A slide-only
    /// problem (too few landmarks on a slide frame) is reported in
    /// [`FrameLabels::slide`] instead.
    pub fn process(&mut self, frame: &FrameInput) -> HandmoveResult<FrameLabels> {
        validate_frame(frame)?;

        let frame_index = self.frame_index;
        self.frame_index += 1;

        let scroll = self.scroll.update(frame.rect.center(), frame.rect.height);
        let zoom = self.zoom.update(frame.rect.height);
        let slide = if self.is_slide_frame(frame_index) {
            self.slide.update(&frame.landmarks)
        } else {
            Ok(SlideLabel::None)
        };

        if let Err(e) = &slide {
            tracing::warn!(frame_index, "slide detection skipped: {e}");
        }

        Ok(FrameLabels {
            frame_index,
            scroll,
            zoom,
            slide,
        })
    }

    /// Whether slide detection runs on the frame with this index.
    pub fn is_slide_frame(&self, frame_index: u64) -> bool {
        frame_index % self.config.slide_frame_stride == 0
    }

    /// Forget all remembered state, as when a new hand session starts.
    pub fn reset(&mut self) {
        self.scroll.reset();
        self.zoom.reset();
        self.slide.reset();
        self.frame_index = 0;
        tracing::debug!("classifier reset");
    }

    pub fn state(&self) -> ClassifierState {
        ClassifierState {
            prev_center: self.scroll.prev_center(),
            prev_height: self.zoom.prev_height(),
            prev_angle_deg: self.slide.prev_angle_deg(),
            frame_index: self.frame_index,
        }
    }

    pub fn slide_phase(&self) -> SlidePhase {
        self.slide.phase()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frame_index
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}

impl Default for MovementClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate_frame(frame: &FrameInput) -> HandmoveResult<()> {
    if frame.landmarks.is_empty() {
        return Err(HandmoveError::invalid_input("landmark list is empty"));
    }
    let height = frame.rect.height;
    if !(height.is_finite() && height > 0.0) {
        return Err(HandmoveError::invalid_input(format!(
            "rectangle height must be positive, got {height}"
        )));
    }
    if !frame.rect.center().is_finite() {
        return Err(HandmoveError::invalid_input(
            "rectangle center is not finite",
        ));
    }
    Ok(())
}
