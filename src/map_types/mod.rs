//! Map generation strategies and the spec object that selects between them.

pub mod cluster;
pub mod rooms;
pub mod uniform;

use crate::{grid::GridMap, Connectivity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Parameters for procedural map generation.
///
/// `num_rooms > 0` selects rooms-and-corridors mode, otherwise uniform
/// noise; `cluster_iterations > 0` adds cellular-automaton passes on top of
/// either. Identical specs always generate identical maps.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MapSpec {
    /// Raster width in cells.
    pub width: i32,
    /// Raster height in cells.
    pub height: i32,
    /// Obstacle probability in `[0, 1]`, clamped at use; uniform mode only.
    pub obstacle_density: f64,
    pub seed: u64,
    /// Force the outermost ring of cells to obstacle after generation.
    pub add_border_walls: bool,
    /// If > 0, generate rectangular rooms connected by corridors.
    pub num_rooms: i32,
    pub room_min_w: i32,
    pub room_min_h: i32,
    pub room_max_w: i32,
    pub room_max_h: i32,
    /// Corridor brush thickness in cells.
    pub corridor_width: i32,
    /// Cellular-automaton passes applied after the primary generator;
    /// 0 disables.
    pub cluster_iterations: i32,
    pub connectivity: Connectivity,
}

impl Default for MapSpec {
    fn default() -> Self {
        MapSpec {
            width: 64,
            height: 64,
            obstacle_density: 0.20,
            seed: 42,
            add_border_walls: true,
            num_rooms: 0,
            room_min_w: 6,
            room_min_h: 6,
            room_max_w: 14,
            room_max_h: 14,
            corridor_width: 2,
            cluster_iterations: 0,
            connectivity: Connectivity::Eight,
        }
    }
}

/// Spec validation and loading errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// A room size range has its minimum above its maximum.
    InvalidRoomRange { min: i32, max: i32 },
    /// The spec file could not be read or written.
    Io(String),
    /// The spec text failed to parse as RON.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "invalid map dimensions {}x{}", width, height)
            }
            ConfigError::InvalidRoomRange { min, max } => {
                write!(f, "invalid room size range {}..={}", min, max)
            }
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl MapSpec {
    /// Check the spec before generation. Room ranges are only checked when
    /// rooms mode is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.num_rooms > 0 {
            if self.room_min_w > self.room_max_w {
                return Err(ConfigError::InvalidRoomRange {
                    min: self.room_min_w,
                    max: self.room_max_w,
                });
            }
            if self.room_min_h > self.room_max_h {
                return Err(ConfigError::InvalidRoomRange {
                    min: self.room_min_h,
                    max: self.room_max_h,
                });
            }
        }
        Ok(())
    }

    /// Generate a map from this spec.
    ///
    /// Runs rooms-and-corridors when `num_rooms > 0`, uniform noise
    /// otherwise, then the clustering post-process when requested. The
    /// returned map is always the result of a fully applied strategy.
    pub fn generate(&self) -> Result<GridMap, ConfigError> {
        self.validate()?;

        let mut rng = crate::sampling::map_rng(self.seed);
        let mut map = if self.num_rooms > 0 {
            rooms::generate(self, &mut rng)
        } else {
            uniform::generate(self, &mut rng)
        };

        if self.cluster_iterations > 0 {
            cluster::grow_clusters(&mut map, self.cluster_iterations, self.connectivity);
        }

        Ok(map)
    }

    /// Parse a spec from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ron::de::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a spec from a RON file.
    pub fn from_ron_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&text)
    }

    /// Serialize this spec to RON text.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Force the outermost ring of cells to obstacle.
pub(crate) fn add_border_walls(map: &mut GridMap) {
    map.rectangle(0, 0, map.width(), map.height(), 1, false);
}
