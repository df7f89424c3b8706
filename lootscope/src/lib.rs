//! Lootscope - world-scanning loot tracker for game overlays
//!
//! This library discovers items of interest inside a live game-world
//! snapshot and turns every match into a renderable, screen-projected
//! [`PointOfInterest`] record. The host supplies the world through the
//! trait seams in [`host`]; the tracker supplies the matching, the
//! hierarchy traversal, and the interval-gated refresh.
//!
//! Rendering, world mutation, and configuration persistence policy all
//! stay on the host side.

pub mod feed;
pub mod geometry;
pub mod host;
pub mod poi;
pub mod tracker;

pub use feed::PoiFeed;
pub use geometry::{Vec2, Vec3};
pub use poi::{PointOfInterest, Rgba};
pub use tracker::{LootTracker, TrackedNames, TrackerConfig};
