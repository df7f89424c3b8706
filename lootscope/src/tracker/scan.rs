//! The two scanning passes over the world snapshot.
//!
//! Loose items first, container interiors second. Corpses and containers
//! are never matched by their own name; they only ever contribute their
//! contents, each gated by its own configuration toggle.

use tracing::{debug, warn};

use crate::host::{CameraView, WorldEntry, WorldView};
use crate::poi::PointOfInterest;

use super::config::TrackerConfig;
use super::matcher;
use super::walker::walk_contents;

/// Owner label attached to matches found inside a corpse.
pub const CORPSE_LABEL: &str = "Corpse";

/// Pass 1: loose world items, plus corpse inventories when enabled.
///
/// Iterates the loose collection by index in the host's order. Plain
/// items are name-matched directly and emitted unsuffixed; corpse entries
/// delegate their contents to the tree walker under [`CORPSE_LABEL`].
pub(crate) fn scan_loose_entries(
    world: &dyn WorldView,
    config: &TrackerConfig,
    camera: &dyn CameraView,
    out: &mut Vec<PointOfInterest>,
) {
    let count = world.loose_entry_count();
    let before = out.len();

    for index in 0..count {
        let Some(entry) = world.loose_entry(index) else {
            continue;
        };

        match entry {
            WorldEntry::Corpse { contents, position } => {
                if config.search_inside_corpses {
                    walk_contents(
                        contents,
                        CORPSE_LABEL,
                        position,
                        &config.tracked_names,
                        camera,
                        config.color,
                        out,
                    );
                }
            }
            WorldEntry::Loose { item, position } => {
                if !item.is_valid() {
                    continue;
                }

                let item_name = item.display_name();
                if matcher::matches_any(&item_name, &config.tracked_names) {
                    out.push(PointOfInterest::project(
                        item_name,
                        position,
                        config.color,
                        camera,
                    ));
                }
            }
        }
    }

    debug!(
        entries = count,
        matches = out.len() - before,
        "loose scan complete"
    );
}

/// Pass 2: container interiors.
///
/// Containers are re-enumerated from the live scene on every call, so
/// spawned and destroyed containers are picked up each cycle. Invalid
/// handles are skipped one at a time.
pub(crate) fn scan_containers(
    world: &dyn WorldView,
    config: &TrackerConfig,
    camera: &dyn CameraView,
    out: &mut Vec<PointOfInterest>,
) {
    let containers = world.containers();
    let before = out.len();

    for container in &containers {
        if !container.is_valid() {
            warn!("skipping invalid container handle");
            continue;
        }

        walk_contents(
            container.contents(),
            &container.display_name(),
            container.position(),
            &config.tracked_names,
            camera,
            config.color,
            out,
        );
    }

    debug!(
        containers = containers.len(),
        matches = out.len() - before,
        "container scan complete"
    );
}
