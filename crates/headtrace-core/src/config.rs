//! Capture configuration
//!
//! Where traces go, what they are called, and how fast samples are taken.
//! Stored as JSON next to the user's other application data.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Slowest accepted sampling rate in Hz.
pub const MIN_SAMPLE_RATE_HZ: f64 = 1.0;
/// Fastest accepted sampling rate in Hz.
pub const MAX_SAMPLE_RATE_HZ: f64 = 1000.0;

/// Errors loading or saving a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for a capture session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Folder run files are written to.
    pub storage_folder: PathBuf,

    /// Identifier prefixed to every run file name.
    pub log_id: String,

    /// Target sampling rate in Hz.
    pub sample_rate_hz: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            storage_folder: default_storage_dir(),
            log_id: "headtrace".to_string(),
            sample_rate_hz: 60.0,
        }
    }
}

impl CaptureConfig {
    /// Load a configuration from a JSON file.
    ///
    /// The sampling rate is clamped to the accepted range on load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&text)?;
        config.set_sample_rate(config.sample_rate_hz);
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Set the sampling rate, clamped to the accepted range.
    pub fn set_sample_rate(&mut self, rate_hz: f64) {
        self.sample_rate_hz = rate_hz.clamp(MIN_SAMPLE_RATE_HZ, MAX_SAMPLE_RATE_HZ);
    }
}

/// The default folder for trace storage.
///
/// Falls back to the current directory when the platform has no data
/// directory to offer.
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("HeadTrace")
        .join("traces")
}
