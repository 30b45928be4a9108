pub mod classify;
pub mod config;
pub mod synth;
pub mod validate;

use std::path::Path;

use handmove_frame_model::frame::{parse_frames, FrameInput};

/// Read and parse a JSONL frames file.
pub fn load_frames(path: &Path) -> anyhow::Result<Vec<FrameInput>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read frames {}: {e}", path.display()))?;
    parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse frames: {e}"))
}
