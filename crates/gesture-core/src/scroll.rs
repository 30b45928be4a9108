//! Scroll detection: direction of whole-hand translation.
//!
//! The rectangle center is compared with the previous frame's center. A
//! displacement counts only when it exceeds a fraction of the rectangle
//! height, so a hand close to the camera needs the same relative movement
//! as a distant one.

use handmove_frame_model::frame::Point2D;
use handmove_frame_model::labels::ScrollLabel;

use crate::geometry::{distance, heading_degrees};

/// Tracks the previous rectangle center.
#[derive(Debug, Clone)]
pub struct ScrollDetector {
    distance_factor: f64,
    reference_offset: f64,
    prev_center: Option<Point2D>,
}

impl ScrollDetector {
    pub fn new(distance_factor: f64, reference_offset: f64) -> Self {
        Self {
            distance_factor,
            reference_offset,
            prev_center: None,
        }
    }

    /// Classify the movement from the previous center to `center`, then
    /// remember `center`.
    pub fn update(&mut self, center: Point2D, height: f64) -> ScrollLabel {
        let label = match self.prev_center {
            Some(prev) => self.classify(prev, center, height),
            None => ScrollLabel::None,
        };
        self.prev_center = Some(center);
        label
    }

    fn classify(&self, prev: Point2D, center: Point2D, height: f64) -> ScrollLabel {
        let moved = distance(center, prev);
        let threshold = self.distance_factor * height;
        if moved <= threshold {
            return ScrollLabel::None;
        }

        let angle = heading_degrees(prev, center, self.reference_offset);
        let label = label_for_heading(angle);
        tracing::debug!(angle, moved, threshold, label = %label, "scroll recognized");
        label
    }

    pub fn prev_center(&self) -> Option<Point2D> {
        self.prev_center
    }

    pub fn reset(&mut self) {
        self.prev_center = None;
    }
}

/// Map a movement heading (degrees) to a scroll direction.
///
/// Quadrants are half-open: `[-45, 45)` right, `[45, 135)` up,
/// `[-135, -45)` down, everything else left.
pub fn label_for_heading(angle_deg: i32) -> ScrollLabel {
    match angle_deg {
        -45..=44 => ScrollLabel::Right,
        45..=134 => ScrollLabel::Up,
        -135..=-46 => ScrollLabel::Down,
        _ => ScrollLabel::Left,
    }
}
