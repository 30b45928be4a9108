//! Validate a frame stream against the classifier's input contract.

use std::path::PathBuf;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating frames at: {}", path.display());

    let frames = super::load_frames(&path)?;
    println!("  Frames: {}", frames.len());

    let stamped = frames.iter().filter(|f| f.t.is_some()).count();
    println!("  Timestamped: {stamped}");

    let mut errors = Vec::new();
    let mut prev_t = None;
    for (index, frame) in frames.iter().enumerate() {
        for issue in frame.issues() {
            errors.push(format!("frame {index}: {issue}"));
        }
        if let Some(t) = frame.t {
            if let Some(prev) = prev_t {
                if t <= prev {
                    errors.push(format!(
                        "frame {index}: timestamp {t} does not follow {prev}"
                    ));
                }
            }
            prev_t = Some(t);
        }
    }

    if errors.is_empty() {
        println!("\nFrame stream is valid.");
    } else {
        println!("\nValidation issues:");
        for error in &errors {
            println!("  - {error}");
        }
        println!(
            "\n{} issue(s) found. Affected frames may be rejected or skip slide detection.",
            errors.len()
        );
    }

    Ok(())
}
