//! Slide detection: rotation of the hand around the wrist.
//!
//! The hand axis runs from the wrist to the middle finger MCP. A slide is
//! recognized only when the previous evaluated frame had the hand upright
//! (axis within the gate around 90°) and the axis then turned by more than
//! the angle threshold. Turning toward -x (angle increases) is a left slide.
//!
//! ```text
//!   Uninitialized ──first angle──▶ TrackingVertical | TrackingNonVertical
//!   TrackingVertical ──Δ > +thr──▶ emits Left
//!   TrackingVertical ──Δ < -thr──▶ emits Right
//!   TrackingNonVertical ─────────▶ never emits
//! ```

use handmove_common::error::{HandmoveError, HandmoveResult};
use handmove_frame_model::frame::{hand_axis, Point2D, MIN_LANDMARKS_FOR_AXIS};
use handmove_frame_model::labels::SlideLabel;

use crate::geometry::heading_degrees;

/// Where the slide state machine stands, derived from the stored angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// No angle stored yet.
    Uninitialized,
    /// Previous hand axis was outside the upright gate.
    TrackingNonVertical,
    /// Previous hand axis was upright; the next evaluation may emit a slide.
    TrackingVertical,
}

/// Tracks the previous hand axis angle.
#[derive(Debug, Clone)]
pub struct SlideDetector {
    angle_threshold_deg: i32,
    gate_min_deg: i32,
    gate_max_deg: i32,
    reference_offset: f64,
    prev_angle_deg: Option<i32>,
}

impl SlideDetector {
    pub fn new(
        angle_threshold_deg: i32,
        gate_min_deg: i32,
        gate_max_deg: i32,
        reference_offset: f64,
    ) -> Self {
        Self {
            angle_threshold_deg,
            gate_min_deg,
            gate_max_deg,
            reference_offset,
            prev_angle_deg: None,
        }
    }

    /// Evaluate one frame's landmarks.
    ///
    /// Fails with `InvalidInput` when the hand axis cannot be read; the
    /// stored angle is left untouched in that case.
    pub fn update(&mut self, landmarks: &[Point2D]) -> HandmoveResult<SlideLabel> {
        let angle = hand_axis_degrees(landmarks, self.reference_offset)?;

        let label = match self.prev_angle_deg {
            Some(prev) if self.is_upright(prev) => {
                // widened so an out-of-range threshold cannot overflow
                let delta = i64::from(angle) - i64::from(prev);
                let threshold = i64::from(self.angle_threshold_deg);
                if delta > threshold {
                    SlideLabel::Left
                } else if delta < -threshold {
                    SlideLabel::Right
                } else {
                    SlideLabel::None
                }
            }
            _ => SlideLabel::None,
        };

        if !label.is_none() {
            tracing::debug!(angle, prev = ?self.prev_angle_deg, label = %label, "slide recognized");
        }
        self.prev_angle_deg = Some(angle);
        Ok(label)
    }

    pub fn phase(&self) -> SlidePhase {
        match self.prev_angle_deg {
            None => SlidePhase::Uninitialized,
            Some(angle) if self.is_upright(angle) => SlidePhase::TrackingVertical,
            Some(_) => SlidePhase::TrackingNonVertical,
        }
    }

    pub fn prev_angle_deg(&self) -> Option<i32> {
        self.prev_angle_deg
    }

    pub fn reset(&mut self) {
        self.prev_angle_deg = None;
    }

    fn is_upright(&self, angle_deg: i32) -> bool {
        (self.gate_min_deg..=self.gate_max_deg).contains(&angle_deg)
    }
}

/// Angle of the wrist-to-middle-MCP axis against horizontal, in degrees.
///
/// An upright hand in image coordinates reads 90°.
pub fn hand_axis_degrees(landmarks: &[Point2D], reference_offset: f64) -> HandmoveResult<i32> {
    let (wrist, mcp) = hand_axis(landmarks).ok_or_else(|| {
        HandmoveError::invalid_input(format!(
            "slide detection needs at least {} landmarks, got {}",
            MIN_LANDMARKS_FOR_AXIS,
            landmarks.len()
        ))
    })?;
    if !(wrist.is_finite() && mcp.is_finite()) {
        return Err(HandmoveError::invalid_input(
            "wrist or middle MCP landmark is not finite",
        ));
    }

    Ok(heading_degrees(wrist, mcp, reference_offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use handmove_frame_model::frame::MIDDLE_FINGER_MCP;
    use handmove_frame_model::synthetic::HandPose;

    fn detector() -> SlideDetector {
        SlideDetector::new(12, 80, 100, 0.1)
    }

    fn hand(tilt_deg: f64) -> Vec<Point2D> {
        HandPose::upright(0.5, 0.5, 0.3)
            .with_tilt(tilt_deg)
            .landmarks()
    }

    #[test]
    fn test_upright_hand_reads_ninety_degrees() {
        assert_eq!(hand_axis_degrees(&hand(0.0), 0.1).unwrap(), 90);
        assert_eq!(hand_axis_degrees(&hand(20.0), 0.1).unwrap(), 110);
        assert_eq!(hand_axis_degrees(&hand(-20.0), 0.1).unwrap(), 70);
    }

    #[test]
    fn test_first_evaluation_only_records_angle() {
        let mut slide = detector();
        assert_eq!(slide.phase(), SlidePhase::Uninitialized);
        assert_eq!(slide.update(&hand(0.0)).unwrap(), SlideLabel::None);
        assert_eq!(slide.prev_angle_deg(), Some(90));
        assert_eq!(slide.phase(), SlidePhase::TrackingVertical);
    }

    #[test]
    fn test_tilt_left_and_right() {
        let mut slide = detector();
        slide.update(&hand(0.0)).unwrap();
        assert_eq!(slide.update(&hand(20.0)).unwrap(), SlideLabel::Left);

        let mut slide = detector();
        slide.update(&hand(0.0)).unwrap();
        assert_eq!(slide.update(&hand(-20.0)).unwrap(), SlideLabel::Right);
    }

    #[test]
    fn test_small_tilt_is_ignored() {
        let mut slide = detector();
        slide.update(&hand(0.0)).unwrap();
        assert_eq!(slide.update(&hand(12.0)).unwrap(), SlideLabel::None);
        assert_eq!(slide.prev_angle_deg(), Some(102));
    }

    #[test]
    fn test_gate_blocks_non_vertical_start() {
        let mut slide = detector();
        slide.update(&hand(30.0)).unwrap();
        assert_eq!(slide.phase(), SlidePhase::TrackingNonVertical);
        assert_eq!(slide.update(&hand(60.0)).unwrap(), SlideLabel::None);
        assert_eq!(slide.update(&hand(0.0)).unwrap(), SlideLabel::None);
        // back upright, so the next turn counts again
        assert_eq!(slide.update(&hand(-20.0)).unwrap(), SlideLabel::Right);
    }

    #[test]
    fn test_gate_bounds_are_inclusive() {
        let mut slide = detector();
        slide.update(&hand(10.0)).unwrap();
        assert_eq!(slide.prev_angle_deg(), Some(100));
        assert_eq!(slide.update(&hand(25.0)).unwrap(), SlideLabel::Left);

        let mut slide = detector();
        slide.update(&hand(-10.0)).unwrap();
        assert_eq!(slide.prev_angle_deg(), Some(80));
        assert_eq!(slide.update(&hand(-25.0)).unwrap(), SlideLabel::Right);
    }

    #[test]
    fn test_too_few_landmarks_keeps_state() {
        let mut slide = detector();
        slide.update(&hand(0.0)).unwrap();

        let landmarks = hand(30.0);
        let err = slide.update(&landmarks[..9]).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(slide.prev_angle_deg(), Some(90));
    }

    #[test]
    fn test_extreme_threshold_never_fires() {
        let mut slide = SlideDetector::new(i32::MAX, 80, 100, 0.1);
        for tilt in [0.0, 0.0, 60.0, 0.0, -60.0] {
            assert_eq!(slide.update(&hand(tilt)).unwrap(), SlideLabel::None);
        }
    }

    #[test]
    fn test_non_finite_axis_is_rejected() {
        let mut landmarks = hand(0.0);
        landmarks[MIDDLE_FINGER_MCP] = Point2D::new(f64::NAN, 0.2);
        assert!(hand_axis_degrees(&landmarks, 0.1).is_err());
    }
}
