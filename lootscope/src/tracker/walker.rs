//! Item-tree walking for container and corpse interiors.

use tracing::trace;

use crate::geometry::Vec3;
use crate::host::{CameraView, ItemView};
use crate::poi::{PointOfInterest, Rgba};

use super::matcher;
use super::registry::TrackedNames;

/// Scan every item transitively owned by `root` and append matches.
///
/// `owner_label` names whatever holds the tree (a container's short name,
/// or the fixed corpse label) and `position` is that owner's world
/// position; both are attached to every match found inside. An absent
/// root produces nothing. Invalid and excluded items are skipped
/// individually without aborting the walk.
///
/// Matches are appended to `out` in the order the host's traversal yields
/// them, so callers can accumulate one result buffer across several walks
/// within a single scan.
pub(crate) fn walk_contents(
    root: Option<&dyn ItemView>,
    owner_label: &str,
    position: Vec3,
    names: &TrackedNames,
    camera: &dyn CameraView,
    color: Rgba,
    out: &mut Vec<PointOfInterest>,
) {
    let Some(root) = root else {
        return;
    };

    let items = root.all_items();
    trace!(owner = owner_label, items = items.len(), "walking contents");

    for item in items {
        if !item.is_valid() {
            continue;
        }
        if item.is_excluded() {
            continue;
        }

        let item_name = item.display_name();
        if matcher::matches_any(&item_name, names) {
            out.push(PointOfInterest::project(
                matcher::compose_label(&item_name, owner_label),
                position,
                color,
                camera,
            ));
        }
    }
}
