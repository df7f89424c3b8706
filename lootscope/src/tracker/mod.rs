//! The loot tracker core.
//!
//! [`LootTracker`] scans a live world snapshot for items whose display
//! names match a user-maintained set of fragments, and turns every match
//! into a renderable [`PointOfInterest`]. One refresh means: check the
//! preconditions, scan loose items (and corpse inventories), scan
//! container interiors, return the merged sequence.
//!
//! The tracker never renders, never mutates the world, and never fails:
//! if the world, player, or camera is unavailable a refresh degrades to
//! an empty result, and a single dead handle mid-scan only skips that
//! entry. Rate limiting lives one layer up, in [`crate::feed::PoiFeed`];
//! calling `refresh` directly always performs a full scan.
//!
//! # Example
//!
//! ```ignore
//! use lootscope::tracker::LootTracker;
//!
//! let mut tracker = LootTracker::new();
//! tracker.track("bandage");
//! tracker.track("bolts");
//!
//! // `world` is the host adapter implementing lootscope::host::WorldView.
//! for poi in tracker.refresh(&world) {
//!     println!("{poi}");
//! }
//! ```

mod config;
mod matcher;
mod registry;
mod scan;
mod walker;

pub use config::{ConfigError, TrackerConfig, DEFAULT_CACHE_INTERVAL_SECS};
pub use matcher::{compose_label, matches_any};
pub use registry::{TrackedNames, CLEAR_ALL};
pub use scan::CORPSE_LABEL;

use tracing::debug;

use crate::host::WorldView;
use crate::poi::PointOfInterest;

/// The world-scanning loot tracker.
///
/// Owns its [`TrackerConfig`] for the lifetime of the feature instance.
/// `track`, `untrack`, and `refresh` are expected to be called from the
/// host's single update loop; nothing here is shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LootTracker {
    config: TrackerConfig,
}

impl LootTracker {
    /// Create a tracker with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker from an existing configuration.
    pub fn with_config(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// The current configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut TrackerConfig {
        &mut self.config
    }

    /// Start tracking a name fragment. See [`TrackedNames::add`].
    pub fn track(&mut self, name: impl Into<String>) -> bool {
        self.config.tracked_names.add(name)
    }

    /// Stop tracking a fragment, or clear all with [`CLEAR_ALL`]. See
    /// [`TrackedNames::remove`].
    pub fn untrack(&mut self, name: &str) -> bool {
        self.config.tracked_names.remove(name)
    }

    /// Scan the world and return every matching point of interest.
    ///
    /// Returns an empty sequence without scanning when no names are
    /// tracked, the local player is invalid, or no camera is available.
    /// Otherwise the result holds loose-item matches first (in the
    /// host's iteration order, corpse contents inline), then container
    /// matches.
    pub fn refresh(&self, world: &dyn WorldView) -> Vec<PointOfInterest> {
        if self.config.tracked_names.is_empty() {
            return Vec::new();
        }
        if !world.player_is_valid() {
            debug!("refresh skipped, local player unavailable");
            return Vec::new();
        }
        let Some(camera) = world.camera() else {
            debug!("refresh skipped, no active camera");
            return Vec::new();
        };

        let mut records = Vec::new();

        scan::scan_loose_entries(world, &self.config, camera, &mut records);

        if self.config.search_inside_containers {
            scan::scan_containers(world, &self.config, camera, &mut records);
        }

        records
    }
}
