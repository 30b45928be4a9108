//! Generate a synthetic frame stream.

use std::path::PathBuf;

use handmove_frame_model::frame::serialize_frames;
use handmove_frame_model::synthetic::{stamp, SyntheticGesture};

pub fn run(gesture: String, output: Option<PathBuf>, steps: usize, fps: u32) -> anyhow::Result<()> {
    let Some(kind) = SyntheticGesture::from_name(&gesture) else {
        let names: Vec<_> = SyntheticGesture::ALL.iter().map(|g| g.name()).collect();
        anyhow::bail!(
            "Unknown gesture '{gesture}'. Expected one of: {}",
            names.join(", ")
        );
    };

    let mut frames = kind.frames(steps);
    stamp(&mut frames, fps);

    let header = serde_json::json!({
        "gesture": kind.name(),
        "steps": steps,
        "fps": fps,
    });
    let content = format!("# {header}\n{}", serialize_frames(&frames)?);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, content)?;
            tracing::info!(gesture = kind.name(), frames = frames.len(), "synthetic stream written");
            println!("Wrote {} frames to: {}", frames.len(), path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}
