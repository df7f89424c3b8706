//! World-space and screen-space vector types.
//!
//! The host engine owns all real geometry; this module only defines the
//! small value types that cross the host boundary: a 3D world position
//! attached to every match, and the 2D screen position the host camera
//! projects it to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Create a new world-space position.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

/// A position in screen space.
///
/// Values may lie outside the viewport; the camera projection makes no
/// promise that a world position is actually on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new screen-space position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The screen origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
