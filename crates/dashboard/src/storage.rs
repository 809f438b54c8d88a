// dashboard/storage.rs
// JSON-file key/value persistence for dashboard state

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Key holding the saved filter preset collection
pub const FILTER_PRESETS_KEY: &str = "filter_presets";
/// Key holding the SLA thresholds
pub const SLA_THRESHOLDS_KEY: &str = "sla_thresholds";

/// Durable local key/value storage: one JSON file per key under a root
/// directory. Reads swallow absence and malformed content; callers fall back
/// to their documented defaults.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted in the platform data directory
    pub fn open_default() -> Self {
        Self::new(default_data_root())
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("discarding malformed state in {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), raw)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

/// Platform-appropriate data directory for the dashboard
pub fn default_data_root() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("csa-dashboard");
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".csa-dashboard");
    }

    PathBuf::from("./csa-dashboard")
}
