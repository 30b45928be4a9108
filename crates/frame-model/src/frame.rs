//! Per-frame hand measurements.
//!
//! Frames are exchanged as JSONL, one frame per line. Lines starting with
//! `#` are header/comment lines and are skipped by the parser.
//! All coordinates are normalized to `[0.0, 1.0]` relative to the camera
//! frame, with `(0.0, 0.0)` at the top-left (y grows downward).

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in nanoseconds, assigned by the capture pipeline.
pub type TimestampNs = u64;

/// Number of landmarks in a complete hand skeleton.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Landmark index of the wrist.
pub const WRIST: usize = 0;

/// Landmark index of the middle finger MCP joint (knuckle).
pub const MIDDLE_FINGER_MCP: usize = 9;

/// Minimum landmark count needed to read the hand axis (wrist to middle MCP).
pub const MIN_LANDMARKS_FOR_AXIS: usize = MIDDLE_FINGER_MCP + 1;

/// A 2D normalized point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point2D {
        Point2D {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Tracked hand rectangle, reduced to its center and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandRect {
    /// Normalized X of the rectangle center.
    pub x_center: f64,
    /// Normalized Y of the rectangle center.
    pub y_center: f64,
    /// Normalized height (fraction of the camera frame height).
    pub height: f64,
}

impl HandRect {
    pub fn new(x_center: f64, y_center: f64, height: f64) -> Self {
        Self {
            x_center,
            y_center,
            height,
        }
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x_center, self.y_center)
    }
}

/// Everything the classifier reads for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Capture timestamp, passed through to the output record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<TimestampNs>,

    /// Hand rectangle summary.
    pub rect: HandRect,

    /// Hand landmarks, indexed positionally (0 = wrist, 9 = middle MCP).
    #[serde(default)]
    pub landmarks: Vec<Point2D>,
}

impl FrameInput {
    pub fn new(rect: HandRect, landmarks: Vec<Point2D>) -> Self {
        Self {
            t: None,
            rect,
            landmarks,
        }
    }

    pub fn with_timestamp(mut self, t: TimestampNs) -> Self {
        self.t = Some(t);
        self
    }

    /// Describe precondition problems without rejecting the frame.
    ///
    /// Used by tooling to report on recorded streams; the classifier does
    /// its own checks.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.landmarks.is_empty() {
            issues.push("landmark list is empty".to_string());
        } else if self.landmarks.len() < MIN_LANDMARKS_FOR_AXIS {
            issues.push(format!(
                "only {} landmarks, slide detection needs {}",
                self.landmarks.len(),
                MIN_LANDMARKS_FOR_AXIS
            ));
        } else if self.landmarks.len() < HAND_LANDMARK_COUNT {
            issues.push(format!(
                "partial skeleton: {} of {} landmarks",
                self.landmarks.len(),
                HAND_LANDMARK_COUNT
            ));
        }
        if !(self.rect.height.is_finite() && self.rect.height > 0.0) {
            issues.push(format!("non-positive rectangle height {}", self.rect.height));
        }
        if !self.rect.center().is_finite() {
            issues.push("rectangle center is not finite".to_string());
        }
        issues
    }
}

/// Wrist and middle MCP, if the landmark list is long enough.
pub fn hand_axis(landmarks: &[Point2D]) -> Option<(Point2D, Point2D)> {
    if landmarks.len() < MIN_LANDMARKS_FOR_AXIS {
        return None;
    }
    Some((landmarks[WRIST], landmarks[MIDDLE_FINGER_MCP]))
}

/// Parse frames from JSONL content (one JSON object per line).
pub fn parse_frames(jsonl: &str) -> Result<Vec<FrameInput>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[FrameInput]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
