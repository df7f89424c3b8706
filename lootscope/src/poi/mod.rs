//! Point-of-interest output records.
//!
//! A [`PointOfInterest`] is the only thing the tracker produces: an
//! immutable snapshot of one matched item, carrying everything a renderer
//! needs (display name, world position, projected screen position, color).
//! Records are built fresh on every scan; nothing about them is stable
//! across scans and consumers must not hold onto them as identities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Vec2, Vec3};
use crate::host::CameraView;

/// An RGBA display color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new color.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque cyan, the default tracker color.
    pub const CYAN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

impl Default for Rgba {
    fn default() -> Self {
        Self::CYAN
    }
}

/// One matched, locatable item.
///
/// Built by the scanners for every live, valid, non-excluded item whose
/// display name matches a tracked fragment. The `name` is the item's own
/// display name, suffixed with its owner when found nested inside a
/// container or corpse (see [`crate::tracker::compose_label`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    /// Display name, possibly owner-suffixed.
    pub name: String,
    /// World position of the item (for nested items, of the owner).
    pub position: Vec3,
    /// Screen projection of `position`; possibly off-screen.
    pub screen_position: Vec2,
    /// Display color, from the tracker configuration.
    pub color: Rgba,
}

impl PointOfInterest {
    /// Build a record, projecting `position` through the host camera.
    pub fn project(
        name: impl Into<String>,
        position: Vec3,
        color: Rgba,
        camera: &dyn CameraView,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            screen_position: camera.world_to_screen(position),
            color,
        }
    }
}

impl fmt::Display for PointOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} -> {}",
            self.name, self.position, self.screen_position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Camera that projects world (x, z) straight to screen (x, y).
    struct FlatCamera;

    impl CameraView for FlatCamera {
        fn world_to_screen(&self, world: Vec3) -> Vec2 {
            Vec2::new(world.x, world.z)
        }
    }

    #[test]
    fn test_project_uses_camera() {
        let poi = PointOfInterest::project(
            "Bandage",
            Vec3::new(1.0, 2.0, 3.0),
            Rgba::CYAN,
            &FlatCamera,
        );
        assert_eq!(poi.name, "Bandage");
        assert_eq!(poi.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(poi.screen_position, Vec2::new(1.0, 3.0));
        assert_eq!(poi.color, Rgba::CYAN);
    }

    #[test]
    fn test_default_color_is_cyan() {
        assert_eq!(Rgba::default(), Rgba::CYAN);
    }

    #[test]
    fn test_display() {
        let poi = PointOfInterest::project(
            "Bolts",
            Vec3::new(1.0, 2.0, 3.0),
            Rgba::default(),
            &FlatCamera,
        );
        let text = format!("{}", poi);
        assert!(text.contains("Bolts"));
        assert!(text.contains("(1.0, 2.0, 3.0)"));
    }
}
