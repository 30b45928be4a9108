//! Discrete movement labels emitted once per frame.
//!
//! Each feature has its own enum. `None` means no qualifying movement was
//! recognized on that frame. The `Display` form is the string delivered to
//! downstream consumers; `None` renders as the `___` placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frame::TimestampNs;

/// Placeholder string for frames without a recognized movement.
pub const NO_MOVEMENT: &str = "___";

/// Direction of a whole-hand translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollLabel {
    #[default]
    None,
    Right,
    Up,
    Left,
    Down,
}

/// Change in apparent hand size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLabel {
    #[default]
    None,
    /// Hand grew: moved toward the camera.
    In,
    /// Hand shrank: moved away from the camera.
    Out,
}

/// Rotation of an upright hand around the wrist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLabel {
    #[default]
    None,
    Left,
    Right,
}

impl ScrollLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollLabel::None => NO_MOVEMENT,
            ScrollLabel::Right => "Scrolling right",
            ScrollLabel::Up => "Scrolling up",
            ScrollLabel::Left => "Scrolling left",
            ScrollLabel::Down => "Scrolling down",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == ScrollLabel::None
    }
}

impl ZoomLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomLabel::None => NO_MOVEMENT,
            ZoomLabel::In => "Zoom in",
            ZoomLabel::Out => "Zoom out",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == ZoomLabel::None
    }
}

impl SlideLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideLabel::None => NO_MOVEMENT,
            SlideLabel::Left => "Slide left",
            SlideLabel::Right => "Slide right",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == SlideLabel::None
    }
}

impl fmt::Display for ScrollLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for ZoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for SlideLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The three labels for one input frame, in serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Zero-based index of the frame within the hand session.
    pub frame: u64,

    /// Timestamp copied from the input frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<TimestampNs>,

    pub scroll: ScrollLabel,
    pub zoom: ZoomLabel,
    pub slide: SlideLabel,

    /// Set when slide detection rejected this frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_error: Option<String>,
}

impl LabelRecord {
    /// Whether any of the three features recognized a movement.
    pub fn has_movement(&self) -> bool {
        !(self.scroll.is_none() && self.zoom.is_none() && self.slide.is_none())
    }
}

/// Parse label records from JSONL content.
pub fn parse_records(jsonl: &str) -> Result<Vec<LabelRecord>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize label records to JSONL format.
pub fn serialize_records(records: &[LabelRecord]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(ScrollLabel::Right.to_string(), "Scrolling right");
        assert_eq!(ScrollLabel::Down.to_string(), "Scrolling down");
        assert_eq!(ZoomLabel::Out.to_string(), "Zoom out");
        assert_eq!(SlideLabel::Left.to_string(), "Slide left");
        assert_eq!(ScrollLabel::None.to_string(), NO_MOVEMENT);
        assert_eq!(ZoomLabel::None.to_string(), NO_MOVEMENT);
        assert_eq!(SlideLabel::None.to_string(), NO_MOVEMENT);
    }

    #[test]
    fn test_default_is_none() {
        assert!(ScrollLabel::default().is_none());
        assert!(ZoomLabel::default().is_none());
        assert!(SlideLabel::default().is_none());
    }

    #[test]
    fn test_record_json_format() {
        let record = LabelRecord {
            frame: 3,
            t: Some(100),
            scroll: ScrollLabel::Up,
            zoom: ZoomLabel::None,
            slide: SlideLabel::Right,
            slide_error: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"scroll\":\"up\""));
        assert!(json.contains("\"zoom\":\"none\""));
        assert!(json.contains("\"slide\":\"right\""));
        assert!(!json.contains("slide_error"));
        assert!(record.has_movement());
    }

    #[test]
    fn test_records_roundtrip_skips_comments() {
        let records = vec![LabelRecord {
            frame: 0,
            t: None,
            scroll: ScrollLabel::None,
            zoom: ZoomLabel::None,
            slide: SlideLabel::None,
            slide_error: Some("too few landmarks".to_string()),
        }];
        let jsonl = format!("# labels\n{}", serialize_records(&records).unwrap());
        let parsed = parse_records(&jsonl).unwrap();
        assert_eq!(parsed, records);
        assert!(!parsed[0].has_movement());
    }
}
