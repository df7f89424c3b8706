//! Tracker configuration.
//!
//! The whole user-facing surface of the tracker is a handful of scalars
//! and one list: the tracked fragments, the two search toggles, the
//! display color, and the cache interval the refresh harness honors.
//! The struct serializes to plain JSON so hosts can persist it wherever
//! they keep their settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::poi::Rgba;

use super::registry::TrackedNames;

/// Default refresh interval between scans, in seconds.
pub const DEFAULT_CACHE_INTERVAL_SECS: f32 = 3.0;

/// Errors from loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a valid configuration.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration owned by a [`LootTracker`].
///
/// Unknown fields in persisted JSON are ignored and missing fields fall
/// back to their defaults, so older files keep loading as the surface
/// grows.
///
/// [`LootTracker`]: super::LootTracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Name fragments to match item names against.
    pub tracked_names: TrackedNames,

    /// Whether container interiors are scanned.
    pub search_inside_containers: bool,

    /// Whether corpse inventories are scanned.
    pub search_inside_corpses: bool,

    /// Display color attached to every emitted record.
    pub color: Rgba,

    /// Minimum seconds between scans, honored by the refresh harness.
    pub cache_interval_secs: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tracked_names: TrackedNames::new(),
            search_inside_containers: true,
            search_inside_corpses: true,
            color: Rgba::CYAN,
            cache_interval_secs: DEFAULT_CACHE_INTERVAL_SECS,
        }
    }
}

impl TrackerConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable container-interior scanning.
    pub fn with_container_search(mut self, enabled: bool) -> Self {
        self.search_inside_containers = enabled;
        self
    }

    /// Enable or disable corpse-inventory scanning.
    pub fn with_corpse_search(mut self, enabled: bool) -> Self {
        self.search_inside_corpses = enabled;
        self
    }

    /// Set the cache interval in seconds.
    pub fn with_cache_interval_secs(mut self, secs: f32) -> Self {
        self.cache_interval_secs = secs;
        self
    }

    /// The cache interval as a [`Duration`].
    ///
    /// Negative and non-finite values clamp to zero (scan on every poll).
    pub fn cache_interval(&self) -> Duration {
        let secs = self.cache_interval_secs;
        if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f32(secs)
        } else {
            Duration::ZERO
        }
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the configuration to a JSON file, pretty-printed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = TrackerConfig::default();
        assert!(config.tracked_names.is_empty());
        assert!(config.search_inside_containers);
        assert!(config.search_inside_corpses);
        assert_eq!(config.color, Rgba::CYAN);
        assert_eq!(config.cache_interval_secs, DEFAULT_CACHE_INTERVAL_SECS);
    }

    #[test]
    fn test_builder_methods() {
        let config = TrackerConfig::new()
            .with_color(Rgba::WHITE)
            .with_container_search(false)
            .with_corpse_search(false)
            .with_cache_interval_secs(1.5);

        assert_eq!(config.color, Rgba::WHITE);
        assert!(!config.search_inside_containers);
        assert!(!config.search_inside_corpses);
        assert_eq!(config.cache_interval_secs, 1.5);
    }

    #[test]
    fn test_cache_interval_clamps_bad_values() {
        let config = TrackerConfig::new().with_cache_interval_secs(-1.0);
        assert_eq!(config.cache_interval(), Duration::ZERO);

        let config = TrackerConfig::new().with_cache_interval_secs(f32::NAN);
        assert_eq!(config.cache_interval(), Duration::ZERO);

        let config = TrackerConfig::new().with_cache_interval_secs(0.5);
        assert_eq!(config.cache_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");

        let mut config = TrackerConfig::new()
            .with_corpse_search(false)
            .with_cache_interval_secs(5.0);
        config.tracked_names.add("phone");
        config.tracked_names.add("bolts");

        config.save(&path).unwrap();
        let loaded = TrackerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let loaded: TrackerConfig =
            serde_json::from_str(r#"{"tracked_names": ["phone"]}"#).unwrap();
        assert_eq!(loaded.tracked_names.len(), 1);
        assert!(loaded.search_inside_containers);
        assert_eq!(loaded.cache_interval_secs, DEFAULT_CACHE_INTERVAL_SECS);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let result = TrackerConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = TrackerConfig::load("/nonexistent/tracker.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
