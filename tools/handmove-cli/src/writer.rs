//! JSONL writer for per-frame label records.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use handmove_common::error::HandmoveResult;
use handmove_frame_model::labels::LabelRecord;

/// Writes label records to a JSONL file, one line per input frame.
pub struct LabelWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    records_written: u64,
}

impl LabelWriter {
    /// Create the output file, writing `header` as a `#` comment line.
    pub fn new(path: PathBuf, header: &serde_json::Value) -> HandmoveResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "# {}", serde_json::to_string(header)?)?;

        Ok(Self {
            writer,
            path,
            records_written: 0,
        })
    }

    pub fn write_record(&mut self, record: &LabelRecord) -> HandmoveResult<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{json}")?;
        self.records_written += 1;

        if self.records_written % 1000 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> HandmoveResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for LabelWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
