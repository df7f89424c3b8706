//! Trait seams to the game host.
//!
//! The tracker never talks to the engine directly. The host (or a test
//! fixture) implements these traits over its live scene objects and hands
//! the tracker a [`WorldView`] for each refresh. All traits are
//! dyn-compatible so adapters can be composed behind trait objects.
//!
//! # Validity
//!
//! Engine handles die at arbitrary times. Every trait here exposes a
//! validity flag, and the scanners treat an invalid handle as "skip this
//! one entry, keep scanning" rather than an error. A handle that is
//! already unusable at enumeration time may simply be omitted by the
//! adapter (e.g. [`WorldView::loose_entry`] returning `None`).
//!
//! # Snapshot semantics
//!
//! A `WorldView` is read for the duration of exactly one refresh. The
//! underlying world may mutate between refreshes; it must not mutate in a
//! way that invalidates borrows while a refresh is running. This matches
//! the single-threaded update-loop contract the tracker is written for.

use crate::geometry::{Vec2, Vec3};

/// A single item in the host's inventory hierarchy.
pub trait ItemView {
    /// Localized display name, as the player would read it.
    fn display_name(&self) -> String;

    /// Whether the underlying engine handle is still alive.
    fn is_valid(&self) -> bool;

    /// Whether the host's filtering rule excludes this item from being
    /// surfaced on its own (e.g. a round seated in a magazine).
    fn is_excluded(&self) -> bool;

    /// Point-in-time flattened view of this item and every item it
    /// transitively owns, at any nesting depth. The first element is the
    /// item itself. Not a live view; ownership edges read once.
    fn all_items(&self) -> Vec<&dyn ItemView>;
}

/// A physical container placed in the scene.
pub trait ContainerView {
    /// Localized short name, used as the owner label for matches inside.
    fn display_name(&self) -> String;

    /// Current world position of the container.
    fn position(&self) -> Vec3;

    /// Whether the underlying engine handle is still alive.
    fn is_valid(&self) -> bool;

    /// Root item of the stored contents, if the container has any.
    fn contents(&self) -> Option<&dyn ItemView>;
}

/// The active camera, reduced to the one operation the tracker needs.
pub trait CameraView {
    /// Project a world position to screen space. The result may lie
    /// outside the viewport.
    fn world_to_screen(&self, world: Vec3) -> Vec2;
}

/// One entry of the world's loose-item collection.
///
/// The host's loose collection mixes plain dropped items with corpses.
/// Rather than asking adapters for runtime type checks, the collection is
/// surfaced as a closed set of tagged variants and the scanner dispatches
/// on the tag.
pub enum WorldEntry<'w> {
    /// An item lying directly in the world.
    Loose {
        item: &'w dyn ItemView,
        position: Vec3,
    },
    /// A corpse. Corpses are never name-matched themselves; only their
    /// contents are scanned, and only when corpse search is enabled.
    Corpse {
        /// Root item of the corpse's inventory, if it carries anything.
        contents: Option<&'w dyn ItemView>,
        position: Vec3,
    },
}

/// Read-only view of the current world snapshot.
pub trait WorldView {
    /// Number of entries in the loose-item collection.
    fn loose_entry_count(&self) -> usize;

    /// Entry at `index`, or `None` for an out-of-range index or a handle
    /// that is already dead. Iteration order is engine-defined and not
    /// stable across frames.
    fn loose_entry(&self, index: usize) -> Option<WorldEntry<'_>>;

    /// Fresh enumeration of the live containers in the scene. Queried
    /// once per scan so spawned and destroyed containers are picked up
    /// every cycle.
    fn containers(&self) -> Vec<&dyn ContainerView>;

    /// Whether the local player currently exists and is usable.
    fn player_is_valid(&self) -> bool;

    /// The active camera, if one is available.
    fn camera(&self) -> Option<&dyn CameraView>;
}
