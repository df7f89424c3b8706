//! Scene fixtures: a JSON description of a game world.
//!
//! The CLI has no game host to scan, so it feeds the tracker a scripted
//! world loaded from JSON instead. The fixture types implement the
//! library's host traits directly, which makes the CLI a convenient way
//! to eyeball matcher and scanner behavior on hand-written scenes.
//!
//! # Format
//!
//! ```json
//! {
//!   "items": [
//!     { "kind": "loose", "name": "Broken Phone", "position": { "x": 1.0, "y": 2.0, "z": 3.0 } },
//!     { "kind": "corpse", "position": { "x": 5.0, "y": 0.0, "z": 5.0 },
//!       "contents": { "name": "Inventory", "children": [ { "name": "Bandage" } ] } }
//!   ],
//!   "containers": [
//!     { "name": "Toolbox", "position": { "x": 2.0, "y": 0.0, "z": 8.0 },
//!       "contents": { "name": "Frame", "children": [ { "name": "Bolts" } ] } }
//!   ]
//! }
//! ```
//!
//! The camera is a fixed top-down projection (world x/z to screen x/y,
//! scaled and offset); set `"camera": null` to exercise the no-camera
//! short-circuit.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use lootscope::host::{CameraView, ContainerView, ItemView, WorldEntry, WorldView};
use lootscope::{Vec2, Vec3};

/// Errors from loading a scene fixture.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid scene.
    #[error("invalid scene: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_true() -> bool {
    true
}

fn default_camera() -> Option<CameraSpec> {
    Some(CameraSpec::default())
}

/// One item in a scripted inventory tree.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneItem {
    pub name: String,
    #[serde(default = "default_true")]
    pub valid: bool,
    #[serde(default)]
    pub excluded: bool,
    #[serde(default)]
    pub children: Vec<SceneItem>,
}

impl SceneItem {
    fn collect<'a>(&'a self, out: &mut Vec<&'a dyn ItemView>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }
}

impl ItemView for SceneItem {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn is_excluded(&self) -> bool {
        self.excluded
    }

    fn all_items(&self) -> Vec<&dyn ItemView> {
        let mut items = Vec::new();
        self.collect(&mut items);
        items
    }
}

/// One entry of the scripted loose-item collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneEntry {
    /// A plain item lying in the world.
    Loose {
        #[serde(flatten)]
        item: SceneItem,
        position: Vec3,
    },
    /// A corpse with an optional inventory.
    Corpse {
        position: Vec3,
        #[serde(default)]
        contents: Option<SceneItem>,
    },
}

/// A scripted container.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneContainer {
    pub name: String,
    pub position: Vec3,
    #[serde(default = "default_true")]
    pub valid: bool,
    #[serde(default)]
    pub contents: Option<SceneItem>,
}

impl ContainerView for SceneContainer {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn contents(&self) -> Option<&dyn ItemView> {
        self.contents.as_ref().map(|item| item as &dyn ItemView)
    }
}

/// Top-down debug projection: world x/z map to screen x/y.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSpec {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl CameraView for CameraSpec {
    fn world_to_screen(&self, world: Vec3) -> Vec2 {
        Vec2::new(
            world.x * self.scale + self.offset.x,
            world.z * self.scale + self.offset.y,
        )
    }
}

/// A complete scripted world, directly usable as a [`WorldView`].
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    #[serde(default = "default_true")]
    pub player_valid: bool,
    #[serde(default = "default_camera")]
    pub camera: Option<CameraSpec>,
    #[serde(default)]
    pub items: Vec<SceneEntry>,
    #[serde(default)]
    pub containers: Vec<SceneContainer>,
}

impl SceneFile {
    /// Load a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl WorldView for SceneFile {
    fn loose_entry_count(&self) -> usize {
        self.items.len()
    }

    fn loose_entry(&self, index: usize) -> Option<WorldEntry<'_>> {
        match self.items.get(index)? {
            SceneEntry::Loose { item, position } => Some(WorldEntry::Loose {
                item: item as &dyn ItemView,
                position: *position,
            }),
            SceneEntry::Corpse { position, contents } => Some(WorldEntry::Corpse {
                contents: contents.as_ref().map(|item| item as &dyn ItemView),
                position: *position,
            }),
        }
    }

    fn containers(&self) -> Vec<&dyn ContainerView> {
        self.containers
            .iter()
            .map(|c| c as &dyn ContainerView)
            .collect()
    }

    fn player_is_valid(&self) -> bool {
        self.player_valid
    }

    fn camera(&self) -> Option<&dyn CameraView> {
        self.camera.as_ref().map(|c| c as &dyn CameraView)
    }
}
