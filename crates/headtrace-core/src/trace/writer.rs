//! Per-run trace files
//!
//! Owns the file lifecycle for trace recording: one file per run, records
//! rebased against the run's first sample, clean close on stop or drop.

use super::HeadSample;
use crate::timestamp::Timestamp;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Errors from trace recording.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// `add_log` was called with no run in progress.
    #[error("no run in progress; call start() before add_log()")]
    NotRunning,

    /// The run file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes head-orientation samples to one file per run.
///
/// Two states: idle (no open file) and running. `start` opens the next run
/// file, `add_log` appends one line per sample, `stop` flushes and closes.
/// The first sample of a run becomes the time origin: every line's timestamp
/// is relative to it, so a run file always begins at `0.000000`.
///
/// Not synchronized; a writer instance belongs to one thread.
pub struct TraceWriter {
    storage_folder: PathBuf,
    log_id: String,
    run_id: u32,
    output: Option<BufWriter<File>>,
    start_timestamp: Option<Timestamp>,
    last_timestamp: Option<Timestamp>,
}

impl TraceWriter {
    /// Create an idle writer.
    ///
    /// Neither the folder nor the log id is validated here; the folder is
    /// created on `start` and any filesystem problem surfaces there.
    pub fn new(storage_folder: impl Into<PathBuf>, log_id: impl Into<String>) -> Self {
        Self {
            storage_folder: storage_folder.into(),
            log_id: log_id.into(),
            run_id: 0,
            output: None,
            start_timestamp: None,
            last_timestamp: None,
        }
    }

    /// Begin a new run: open the next run file and reset the time origin.
    ///
    /// If a run is already in progress it is stopped first; the interrupted
    /// run keeps its file and the new run gets the next id.
    pub fn start(&mut self) -> Result<(), TraceError> {
        if self.output.is_some() {
            self.stop()?;
        }

        self.run_id += 1;
        fs::create_dir_all(&self.storage_folder)?;
        let path = self.run_path(self.run_id);
        let file = File::create(&path)?;
        self.output = Some(BufWriter::new(file));
        self.start_timestamp = None;
        self.last_timestamp = None;

        tracing::info!(run = self.run_id, path = %path.display(), "run started");
        Ok(())
    }

    /// Append one sample to the current run.
    ///
    /// The first sample after `start` fixes the run's time origin; the line
    /// written is the sample rebased against that origin. Calling with no run
    /// in progress is a caller bug and fails with [`TraceError::NotRunning`].
    pub fn add_log(&mut self, sample: &HeadSample) -> Result<(), TraceError> {
        let output = self.output.as_mut().ok_or(TraceError::NotRunning)?;
        let origin = *self.start_timestamp.get_or_insert(*sample.timestamp());
        writeln!(output, "{}", *sample - origin)?;
        self.last_timestamp = Some(*sample.timestamp());
        Ok(())
    }

    /// End the current run, flushing and closing its file.
    ///
    /// A no-op when no run is in progress, so it is safe to call twice and
    /// safe for the drop guard to call unconditionally.
    pub fn stop(&mut self) -> Result<(), TraceError> {
        if let Some(mut output) = self.output.take() {
            output.flush()?;
            tracing::info!(run = self.run_id, "run stopped");
        }
        Ok(())
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.output.is_some()
    }

    /// The id of the current (or most recent) run; 0 before the first start.
    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    /// Absolute timestamp of the last sample accepted in the current run.
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.last_timestamp
    }

    /// The folder run files are written to.
    pub fn storage_folder(&self) -> &Path {
        &self.storage_folder
    }

    /// The file path for a given run id. Zero-padded so names sort by run.
    pub fn run_path(&self, run_id: u32) -> PathBuf {
        self.storage_folder
            .join(format!("{}_run{:03}.txt", self.log_id, run_id))
    }
}

impl Drop for TraceWriter {
    /// Close the run file on every exit path.
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!(run = self.run_id, "failed to close run file: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;
    use tempfile::TempDir;

    fn sample(seconds: i64, micros: i64, frame_id: u64) -> HeadSample {
        HeadSample::new(
            Timestamp::new(seconds, micros),
            Orientation::default(),
            frame_id,
        )
    }

    #[test]
    fn test_writer_state_machine() {
        let dir = TempDir::new().unwrap();
        let mut writer = TraceWriter::new(dir.path(), "headset");

        assert!(!writer.is_running());
        assert_eq!(writer.run_id(), 0);

        writer.start().unwrap();
        assert!(writer.is_running());
        assert_eq!(writer.run_id(), 1);

        writer.add_log(&sample(10, 0, 1)).unwrap();
        assert_eq!(writer.last_timestamp(), Some(Timestamp::new(10, 0)));

        writer.stop().unwrap();
        assert!(!writer.is_running());
    }

    #[test]
    fn test_add_log_while_idle_fails() {
        let dir = TempDir::new().unwrap();
        let mut writer = TraceWriter::new(dir.path(), "headset");

        let err = writer.add_log(&sample(10, 0, 1)).unwrap_err();
        assert!(matches!(err, TraceError::NotRunning));
        assert!(!writer.run_path(1).exists());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut writer = TraceWriter::new(dir.path(), "headset");

        writer.start().unwrap();
        writer.stop().unwrap();
        writer.stop().unwrap();
        assert!(!writer.is_running());
    }

    #[test]
    fn test_start_while_running_rolls_over() {
        let dir = TempDir::new().unwrap();
        let mut writer = TraceWriter::new(dir.path(), "headset");

        writer.start().unwrap();
        writer.add_log(&sample(1, 0, 1)).unwrap();
        writer.start().unwrap();

        assert_eq!(writer.run_id(), 2);
        assert!(writer.run_path(1).exists());
        assert!(writer.run_path(2).exists());
        assert!(writer.last_timestamp().is_none());
    }

    #[test]
    fn test_run_paths_sort_by_run() {
        let dir = TempDir::new().unwrap();
        let writer = TraceWriter::new(dir.path(), "headset");
        let a = writer.run_path(2);
        let b = writer.run_path(10);
        assert!(a.file_name().unwrap() < b.file_name().unwrap());
    }
}
