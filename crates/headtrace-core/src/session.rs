//! Session manifests
//!
//! A small JSON sidecar written next to the run files so a capture session
//! can be identified later without opening the traces themselves.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{CaptureConfig, ConfigError};

/// File name of the manifest inside the storage folder.
pub const MANIFEST_FILE: &str = "session.json";

/// Metadata describing a capture session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionManifest {
    /// Log identifier the run files carry.
    pub log_id: String,

    /// When the session was created (RFC 3339).
    pub created: String,

    /// Sampling rate the session was captured at, in Hz.
    pub sample_rate_hz: f64,
}

impl SessionManifest {
    /// Build a manifest for a capture about to begin.
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            log_id: config.log_id.clone(),
            created: Utc::now().to_rfc3339(),
            sample_rate_hz: config.sample_rate_hz,
        }
    }

    /// Write the manifest into a storage folder, creating it if needed.
    pub fn save(&self, folder: impl AsRef<Path>) -> Result<(), ConfigError> {
        let folder = folder.as_ref();
        fs::create_dir_all(folder)?;
        let text = serde_json::to_string_pretty(self)?;
        fs::write(folder.join(MANIFEST_FILE), text)?;
        Ok(())
    }

    /// Read the manifest from a storage folder.
    pub fn load(folder: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(folder.as_ref().join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut config = CaptureConfig::default();
        config.log_id = "pilot".to_string();
        config.sample_rate_hz = 90.0;

        let manifest = SessionManifest::new(&config);
        manifest.save(dir.path()).unwrap();

        let loaded = SessionManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.log_id, "pilot");
        assert_eq!(loaded.sample_rate_hz, 90.0);
        assert_eq!(loaded.created, manifest.created);
    }

    #[test]
    fn test_load_missing_manifest_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            SessionManifest::load(dir.path()),
            Err(ConfigError::Io(_))
        ));
    }
}
