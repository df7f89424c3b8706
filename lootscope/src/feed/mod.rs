//! Interval-gated refresh harness.
//!
//! Scanning the whole world every frame would be wasteful; the host calls
//! [`PoiFeed::poll`] as often as it likes and the feed only re-runs the
//! underlying [`LootTracker::refresh`] once the configured cache interval
//! has elapsed, serving the stored records in between. Staleness is
//! therefore bounded by the interval, never by anything inside the
//! tracker itself.

use std::time::Instant;

use tracing::debug;

use crate::host::WorldView;
use crate::poi::PointOfInterest;
use crate::tracker::LootTracker;

/// Caches tracker results between timed refreshes.
///
/// Single-threaded like everything else in this crate: one feed, one
/// update loop. The cached slice is replaced wholesale on every rescan,
/// so records must not be treated as stable identities across polls.
#[derive(Debug, Default)]
pub struct PoiFeed {
    tracker: LootTracker,
    refreshed_at: Option<Instant>,
    records: Vec<PointOfInterest>,
}

impl PoiFeed {
    /// Create a feed around a tracker.
    pub fn new(tracker: LootTracker) -> Self {
        Self {
            tracker,
            refreshed_at: None,
            records: Vec::new(),
        }
    }

    /// The wrapped tracker.
    pub fn tracker(&self) -> &LootTracker {
        &self.tracker
    }

    /// Mutable access to the wrapped tracker, e.g. for `track`/`untrack`.
    ///
    /// Edits take effect on the next rescan; call [`invalidate`] to force
    /// one on the next poll.
    ///
    /// [`invalidate`]: PoiFeed::invalidate
    pub fn tracker_mut(&mut self) -> &mut LootTracker {
        &mut self.tracker
    }

    /// The records from the most recent rescan.
    pub fn records(&self) -> &[PointOfInterest] {
        &self.records
    }

    /// Drop the cached result so the next poll rescans.
    pub fn invalidate(&mut self) {
        self.refreshed_at = None;
    }

    /// Poll using the current wall clock.
    pub fn poll(&mut self, world: &dyn WorldView) -> &[PointOfInterest] {
        self.poll_at(world, Instant::now())
    }

    /// Poll at an explicit instant.
    ///
    /// Rescans when no result is cached yet or when at least the
    /// configured cache interval has passed since the last rescan;
    /// otherwise returns the cached records untouched.
    pub fn poll_at(&mut self, world: &dyn WorldView, now: Instant) -> &[PointOfInterest] {
        if self.is_stale(now) {
            self.records = self.tracker.refresh(world);
            self.refreshed_at = Some(now);
            debug!(records = self.records.len(), "feed rescanned");
        }
        &self.records
    }

    fn is_stale(&self, now: Instant) -> bool {
        match self.refreshed_at {
            None => true,
            Some(at) => now.duration_since(at) >= self.tracker.config().cache_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::geometry::{Vec2, Vec3};
    use crate::host::{CameraView, ContainerView, WorldEntry};
    use crate::tracker::TrackerConfig;

    /// World with no entries but valid player and camera, counting how
    /// often the camera is looked up as a proxy for refresh runs.
    struct CountingWorld {
        camera: NullCamera,
        polls: std::cell::Cell<usize>,
    }

    struct NullCamera;

    impl CameraView for NullCamera {
        fn world_to_screen(&self, _world: Vec3) -> Vec2 {
            Vec2::ZERO
        }
    }

    impl WorldView for CountingWorld {
        fn loose_entry_count(&self) -> usize {
            0
        }

        fn loose_entry(&self, _index: usize) -> Option<WorldEntry<'_>> {
            None
        }

        fn containers(&self) -> Vec<&dyn ContainerView> {
            Vec::new()
        }

        fn player_is_valid(&self) -> bool {
            true
        }

        fn camera(&self) -> Option<&dyn CameraView> {
            self.polls.set(self.polls.get() + 1);
            Some(&self.camera)
        }
    }

    fn feed_with_interval(secs: f32) -> PoiFeed {
        let config = TrackerConfig::new().with_cache_interval_secs(secs);
        let mut tracker = LootTracker::with_config(config);
        tracker.track("anything");
        PoiFeed::new(tracker)
    }

    #[test]
    fn test_first_poll_always_rescans() {
        let world = CountingWorld {
            camera: NullCamera,
            polls: std::cell::Cell::new(0),
        };
        let mut feed = feed_with_interval(3.0);

        feed.poll_at(&world, Instant::now());
        assert_eq!(world.polls.get(), 1);
    }

    #[test]
    fn test_polls_within_interval_serve_cache() {
        let world = CountingWorld {
            camera: NullCamera,
            polls: std::cell::Cell::new(0),
        };
        let mut feed = feed_with_interval(3.0);
        let start = Instant::now();

        feed.poll_at(&world, start);
        feed.poll_at(&world, start + Duration::from_secs(1));
        feed.poll_at(&world, start + Duration::from_secs(2));
        assert_eq!(world.polls.get(), 1);

        feed.poll_at(&world, start + Duration::from_secs(3));
        assert_eq!(world.polls.get(), 2);
    }

    #[test]
    fn test_invalidate_forces_rescan() {
        let world = CountingWorld {
            camera: NullCamera,
            polls: std::cell::Cell::new(0),
        };
        let mut feed = feed_with_interval(60.0);
        let start = Instant::now();

        feed.poll_at(&world, start);
        feed.invalidate();
        feed.poll_at(&world, start + Duration::from_millis(1));
        assert_eq!(world.polls.get(), 2);
    }

    #[test]
    fn test_zero_interval_rescans_every_poll() {
        let world = CountingWorld {
            camera: NullCamera,
            polls: std::cell::Cell::new(0),
        };
        let mut feed = feed_with_interval(0.0);
        let start = Instant::now();

        feed.poll_at(&world, start);
        feed.poll_at(&world, start);
        assert_eq!(world.polls.get(), 2);
    }
}
