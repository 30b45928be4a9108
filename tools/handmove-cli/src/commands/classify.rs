//! Replay a frame stream through the movement classifier.

use std::collections::BTreeMap;
use std::path::PathBuf;

use handmove_common::config::GestureConfig;
use handmove_gesture_core::MovementClassifier;

use crate::writer::LabelWriter;

pub fn run(
    path: PathBuf,
    output: Option<PathBuf>,
    all: bool,
    config: GestureConfig,
) -> anyhow::Result<()> {
    println!("Classifying frames from: {}", path.display());

    let frames = super::load_frames(&path)?;
    println!("  Loaded {} frames", frames.len());

    if frames.is_empty() {
        println!("  No frames to classify.");
        return Ok(());
    }

    let mut classifier = MovementClassifier::new(config)
        .map_err(|e| anyhow::anyhow!("Invalid classifier config: {e}"))?;

    let mut writer = match output {
        Some(out) => {
            let header = serde_json::json!({
                "source": path.display().to_string(),
                "frames": frames.len(),
                "config": classifier.config(),
            });
            Some(
                LabelWriter::new(out, &header)
                    .map_err(|e| anyhow::anyhow!("Failed to create label file: {e}"))?,
            )
        }
        None => None,
    };

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut rejected = 0usize;
    let mut slide_errors = 0usize;

    for (line, frame) in frames.iter().enumerate() {
        let labels = match classifier.process(frame) {
            Ok(labels) => labels,
            Err(e) => {
                tracing::warn!(line, "frame rejected: {e}");
                println!("  [{line:>5}] rejected: {e}");
                rejected += 1;
                continue;
            }
        };

        let record = labels.to_record(frame.t);
        if record.slide_error.is_some() {
            slide_errors += 1;
        }
        for label in [record.scroll.as_str(), record.zoom.as_str(), record.slide.as_str()] {
            if label != handmove_frame_model::labels::NO_MOVEMENT {
                *counts.entry(label).or_default() += 1;
            }
        }

        if all || record.has_movement() {
            let t = record
                .t
                .map(|t| format!("{:.3}s", t as f64 / 1_000_000_000.0))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  [{:>5}] {:>9}  {:<16} {:<9} {}",
                record.frame, t, record.scroll, record.zoom, record.slide
            );
        }

        if let Some(writer) = writer.as_mut() {
            writer
                .write_record(&record)
                .map_err(|e| anyhow::anyhow!("Failed to write label record: {e}"))?;
        }
    }

    println!("\nSummary:");
    println!("  Frames classified: {}", classifier.frames_processed());
    if rejected > 0 {
        println!("  Frames rejected: {rejected}");
    }
    if slide_errors > 0 {
        println!("  Frames without slide detection: {slide_errors}");
    }
    if counts.is_empty() {
        println!("  No movement recognized.");
    }
    for (label, count) in &counts {
        println!("  {label}: {count}");
    }

    if let Some(writer) = writer {
        println!(
            "\n  {} label records written to: {}",
            writer.records_written(),
            writer.path().display()
        );
    }

    Ok(())
}
