//! Zoom detection from the change in rectangle height.

use handmove_frame_model::labels::ZoomLabel;

/// Tracks the previous rectangle height.
#[derive(Debug, Clone)]
pub struct ZoomDetector {
    height_factor: f64,
    prev_height: Option<f64>,
}

impl ZoomDetector {
    pub fn new(height_factor: f64) -> Self {
        Self {
            height_factor,
            prev_height: None,
        }
    }

    /// Compare `height` with the previous frame's height, then remember it.
    ///
    /// The tolerance band is `height_factor * height` on either side of the
    /// previous height.
    pub fn update(&mut self, height: f64) -> ZoomLabel {
        let label = match self.prev_height {
            Some(prev) => {
                let threshold = self.height_factor * height;
                if height < prev - threshold {
                    ZoomLabel::Out
                } else if height > prev + threshold {
                    ZoomLabel::In
                } else {
                    ZoomLabel::None
                }
            }
            None => ZoomLabel::None,
        };

        if !label.is_none() {
            tracing::debug!(height, prev = ?self.prev_height, label = %label, "zoom recognized");
        }
        self.prev_height = Some(height);
        label
    }

    pub fn prev_height(&self) -> Option<f64> {
        self.prev_height
    }

    pub fn reset(&mut self) {
        self.prev_height = None;
    }
}
