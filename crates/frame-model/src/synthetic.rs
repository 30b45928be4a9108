//! Synthetic hand frames for tests and demos.
//!
//! Generates a plausible 21-point hand skeleton from a small pose
//! description, and canned frame sequences for each recognizable movement.
//! Skeleton offsets are expressed in units of the rectangle height.

use crate::frame::{FrameInput, HandRect, Point2D, TimestampNs, HAND_LANDMARK_COUNT};

/// Hand skeleton in hand-local coordinates: `(along axis, lateral)`.
///
/// Order follows the usual hand landmark layout: wrist, then thumb, index,
/// middle, ring and pinky from base to tip.
const SKELETON: [(f64, f64); HAND_LANDMARK_COUNT] = [
    (0.0, 0.0),
    (0.12, -0.12),
    (0.22, -0.20),
    (0.30, -0.26),
    (0.37, -0.30),
    (0.45, -0.12),
    (0.60, -0.13),
    (0.70, -0.14),
    (0.78, -0.15),
    (0.45, 0.0),
    (0.62, 0.0),
    (0.73, 0.0),
    (0.82, 0.0),
    (0.43, 0.10),
    (0.58, 0.11),
    (0.68, 0.12),
    (0.76, 0.13),
    (0.38, 0.20),
    (0.50, 0.22),
    (0.58, 0.23),
    (0.65, 0.24),
];

/// Distance from the rectangle center back to the wrist, along the hand axis.
const WRIST_OFFSET: f64 = 0.4;

/// Per-frame center displacement for scroll sequences.
const SCROLL_STEP: f64 = 0.03;

/// Per-frame height change for zoom sequences.
const ZOOM_STEP: f64 = 0.02;

/// Per-frame tilt change (degrees) for slide sequences.
const SLIDE_STEP_DEG: f64 = 10.0;

/// Caps so long sequences stay inside the unit image: centers within
/// `[0.2, 0.8]`, heights up to 0.8, and the hand never tips past horizontal.
const MAX_SCROLL_TRAVEL: f64 = 0.6;
const MAX_ZOOM_SPAN: f64 = 0.5;
const MAX_SLIDE_TILT_DEG: f64 = 80.0;

const DEFAULT_HEIGHT: f64 = 0.3;

/// Minimal description of a hand pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPose {
    /// Rectangle center.
    pub center: Point2D,
    /// Rectangle height.
    pub height: f64,
    /// Lean of the hand away from upright, in degrees. Positive values lean
    /// the fingers toward -x, so the wrist-to-knuckle angle is `90 + tilt`.
    pub tilt_deg: f64,
}

impl HandPose {
    /// An upright hand centered at `(x, y)`.
    pub fn upright(x: f64, y: f64, height: f64) -> Self {
        Self {
            center: Point2D::new(x, y),
            height,
            tilt_deg: 0.0,
        }
    }

    pub fn with_tilt(mut self, tilt_deg: f64) -> Self {
        self.tilt_deg = tilt_deg;
        self
    }

    /// Build the 21 landmarks for this pose.
    pub fn landmarks(&self) -> Vec<Point2D> {
        let theta = self.tilt_deg.to_radians();
        // Image coordinates: "up" is -y.
        let axis = (-theta.sin(), -theta.cos());
        let lateral = (theta.cos(), -theta.sin());
        let h = self.height;

        let wrist = self
            .center
            .offset(-WRIST_OFFSET * h * axis.0, -WRIST_OFFSET * h * axis.1);

        SKELETON
            .iter()
            .map(|&(u, v)| {
                wrist.offset(
                    h * (u * axis.0 + v * lateral.0),
                    h * (u * axis.1 + v * lateral.1),
                )
            })
            .collect()
    }

    pub fn frame(&self) -> FrameInput {
        FrameInput::new(
            HandRect::new(self.center.x, self.center.y, self.height),
            self.landmarks(),
        )
    }
}

/// Canned movements the classifier should recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticGesture {
    Idle,
    ScrollRight,
    ScrollUp,
    ScrollLeft,
    ScrollDown,
    ZoomIn,
    ZoomOut,
    SlideLeft,
    SlideRight,
}

impl SyntheticGesture {
    pub const ALL: [SyntheticGesture; 9] = [
        SyntheticGesture::Idle,
        SyntheticGesture::ScrollRight,
        SyntheticGesture::ScrollUp,
        SyntheticGesture::ScrollLeft,
        SyntheticGesture::ScrollDown,
        SyntheticGesture::ZoomIn,
        SyntheticGesture::ZoomOut,
        SyntheticGesture::SlideLeft,
        SyntheticGesture::SlideRight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SyntheticGesture::Idle => "idle",
            SyntheticGesture::ScrollRight => "scroll-right",
            SyntheticGesture::ScrollUp => "scroll-up",
            SyntheticGesture::ScrollLeft => "scroll-left",
            SyntheticGesture::ScrollDown => "scroll-down",
            SyntheticGesture::ZoomIn => "zoom-in",
            SyntheticGesture::ZoomOut => "zoom-out",
            SyntheticGesture::SlideLeft => "slide-left",
            SyntheticGesture::SlideRight => "slide-right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// Generate `steps + 1` frames performing this movement.
    pub fn frames(&self, steps: usize) -> Vec<FrameInput> {
        let travel = (SCROLL_STEP * steps as f64).min(MAX_SCROLL_TRAVEL);
        let zoom_span = (ZOOM_STEP * steps as f64).min(MAX_ZOOM_SPAN);
        let slide_span = (SLIDE_STEP_DEG * steps as f64).min(MAX_SLIDE_TILT_DEG);
        match self {
            SyntheticGesture::Idle => hold(HandPose::upright(0.5, 0.5, DEFAULT_HEIGHT), steps + 1),
            SyntheticGesture::ScrollRight => swipe(
                Point2D::new(0.5 - travel / 2.0, 0.5),
                Point2D::new(0.5 + travel / 2.0, 0.5),
                DEFAULT_HEIGHT,
                steps,
            ),
            SyntheticGesture::ScrollLeft => swipe(
                Point2D::new(0.5 + travel / 2.0, 0.5),
                Point2D::new(0.5 - travel / 2.0, 0.5),
                DEFAULT_HEIGHT,
                steps,
            ),
            SyntheticGesture::ScrollUp => swipe(
                Point2D::new(0.5, 0.5 + travel / 2.0),
                Point2D::new(0.5, 0.5 - travel / 2.0),
                DEFAULT_HEIGHT,
                steps,
            ),
            SyntheticGesture::ScrollDown => swipe(
                Point2D::new(0.5, 0.5 - travel / 2.0),
                Point2D::new(0.5, 0.5 + travel / 2.0),
                DEFAULT_HEIGHT,
                steps,
            ),
            SyntheticGesture::ZoomIn => {
                let from = DEFAULT_HEIGHT;
                push(Point2D::new(0.5, 0.5), from, from + zoom_span, steps)
            }
            SyntheticGesture::ZoomOut => {
                let to = DEFAULT_HEIGHT;
                push(Point2D::new(0.5, 0.5), to + zoom_span, to, steps)
            }
            SyntheticGesture::SlideLeft => tilt(
                Point2D::new(0.5, 0.5),
                DEFAULT_HEIGHT,
                0.0,
                slide_span,
                steps,
            ),
            SyntheticGesture::SlideRight => tilt(
                Point2D::new(0.5, 0.5),
                DEFAULT_HEIGHT,
                0.0,
                -slide_span,
                steps,
            ),
        }
    }
}

/// The same pose repeated `count` times.
pub fn hold(pose: HandPose, count: usize) -> Vec<FrameInput> {
    (0..count).map(|_| pose.frame()).collect()
}

/// Upright hand translating from `from` to `to` over `steps` intervals.
pub fn swipe(from: Point2D, to: Point2D, height: f64, steps: usize) -> Vec<FrameInput> {
    interpolate(steps, |t| {
        HandPose::upright(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
            height,
        )
    })
}

/// Upright hand growing or shrinking in place.
pub fn push(center: Point2D, from_height: f64, to_height: f64, steps: usize) -> Vec<FrameInput> {
    interpolate(steps, |t| {
        HandPose::upright(
            center.x,
            center.y,
            from_height + (to_height - from_height) * t,
        )
    })
}

/// Hand rotating around the wrist while the rectangle stays put.
pub fn tilt(
    center: Point2D,
    height: f64,
    from_deg: f64,
    to_deg: f64,
    steps: usize,
) -> Vec<FrameInput> {
    interpolate(steps, |t| {
        HandPose::upright(center.x, center.y, height).with_tilt(from_deg + (to_deg - from_deg) * t)
    })
}

/// Assign evenly spaced timestamps at the given frame rate.
pub fn stamp(frames: &mut [FrameInput], fps: u32) {
    let interval_ns: TimestampNs = 1_000_000_000 / fps.max(1) as u64;
    for (i, frame) in frames.iter_mut().enumerate() {
        frame.t = Some(i as u64 * interval_ns);
    }
}

fn interpolate(steps: usize, pose_at: impl Fn(f64) -> HandPose) -> Vec<FrameInput> {
    if steps == 0 {
        return vec![pose_at(0.0).frame()];
    }
    (0..=steps)
        .map(|i| pose_at(i as f64 / steps as f64).frame())
        .collect()
}
