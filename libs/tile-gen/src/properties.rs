//! # Tile Properties
//!
//! The read-only description of one tile request. Each shape variant carries
//! only its own fields; [`TileProperties::resolved`] folds the base
//! blueprint's fixed OpenLOCK dimensions into them.
//!
//! ## Example
//!
//! ```rust
//! use tile_gen::properties::{TileProperties, TileShape};
//!
//! let props = TileProperties::from_json(r#"{
//!     "tile_name": "floor_1",
//!     "blueprint": "plain",
//!     "shape": {
//!         "type": "triangular",
//!         "leg_1": 4.0, "leg_2": 3.0, "angle": 90.0,
//!         "base_height": 0.25, "tile_height": 0.5
//!     }
//! }"#).unwrap();
//! assert!(matches!(props.shape, TileShape::Triangular(_)));
//! ```

use config::constants::{
    approx_zero, DEFAULT_CURVE_SEGMENTS, DEFAULT_TRIM_BUFFER, EPSILON, OPENLOCK_FLOOR_BASE_Z,
    OPENLOCK_FLOOR_TILE_Z, OPENLOCK_WALL_BASE_Y, OPENLOCK_WALL_BASE_Z, OPENLOCK_WALL_CORE_Y,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tile_mesh::primitives::CurveType;

use crate::error::TileError;

// =============================================================================
// TILE PROPERTIES
// =============================================================================

/// One tile generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileProperties {
    /// Name every generated piece is keyed by.
    pub tile_name: String,
    /// Distance by which raw blanks overshoot the tile silhouette.
    #[serde(default = "default_buffer")]
    pub buffer: f64,
    /// Base system.
    #[serde(default)]
    pub blueprint: Blueprint,
    /// Shape and its dimensions.
    pub shape: TileShape,
}

fn default_buffer() -> f64 {
    DEFAULT_TRIM_BUFFER
}

/// Base system a tile is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blueprint {
    /// OpenLOCK base with clip and slot cutters; fixed base dimensions.
    #[default]
    OpenLock,
    /// Plain base sized by the request.
    Plain,
    /// No base at all.
    None,
}

/// Tile shape with the dimensions that shape needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileShape {
    /// Straight walls and rectangular floors.
    Rectangular(RectangularTileProps),
    /// Curved walls and curved floors.
    Curved(CurvedTileProps),
    /// Triangular floors.
    Triangular(TriangularTileProps),
    /// Corner walls.
    Corner(CornerTileProps),
}

impl TileShape {
    /// Short shape name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            TileShape::Rectangular(p) => match p.kind {
                RectangularKind::Wall => "straight wall",
                RectangularKind::Floor => "rectangular floor",
            },
            TileShape::Curved(p) => match p.form {
                CurvedForm::Wall { .. } => "curved wall",
                CurvedForm::Floor { .. } => "curved floor",
            },
            TileShape::Triangular(_) => "triangular floor",
            TileShape::Corner(_) => "corner wall",
        }
    }
}

/// Whether a rectangular tile stands up or lies flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectangularKind {
    /// Straight wall: base, core and textured slabs either side.
    Wall,
    /// Floor: base with one textured slab on top.
    #[default]
    Floor,
}

/// Straight walls and rectangular floors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangularTileProps {
    /// Overall tile size, base included.
    pub tile_size: DVec3,
    /// Base size.
    #[serde(default)]
    pub base_size: DVec3,
    /// Wall or floor.
    #[serde(default)]
    pub kind: RectangularKind,
}

/// Curved walls and curved floors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvedTileProps {
    /// Centreline radius of a wall, or leg length of a floor.
    pub radius: f64,
    /// Chords per arc.
    #[serde(default = "default_segments")]
    pub segments: u32,
    /// Overall tile size. Walls use `y` as core depth; `z` is the height.
    pub tile_size: DVec3,
    /// Base size. Walls use `y` as base depth.
    #[serde(default)]
    pub base_size: DVec3,
    /// Wall or floor specifics.
    pub form: CurvedForm,
}

fn default_segments() -> u32 {
    DEFAULT_CURVE_SEGMENTS
}

/// Curved tile specifics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum CurvedForm {
    /// A wall bent around a circle. Negative arcs bend the other way.
    Wall {
        /// Sweep of the wall in degrees.
        degrees_of_arc: f64,
    },
    /// A floor bounded by two legs and an arc.
    Floor {
        /// Angle between the legs in degrees.
        angle: f64,
        /// Convex or concave arc.
        #[serde(default)]
        curve_type: CurveType,
    },
}

/// Triangular floors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangularTileProps {
    /// Side `b`, along the heading.
    pub leg_1: f64,
    /// Side `c`, turned clockwise by `angle`.
    pub leg_2: f64,
    /// Included angle in degrees.
    pub angle: f64,
    /// Base height.
    #[serde(default)]
    pub base_height: f64,
    /// Overall tile height.
    pub tile_height: f64,
}

/// Corner walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerTileProps {
    /// Outer length of the leg running clockwise from the second leg.
    pub leg_1_len: f64,
    /// Outer length of the leg running along +Y.
    pub leg_2_len: f64,
    /// Included angle between the legs in degrees.
    pub angle: f64,
    /// Base size; `y` is the base depth, `z` its height.
    #[serde(default)]
    pub base_size: DVec3,
    /// Overall tile size; `y` is the core depth, `z` the height.
    pub tile_size: DVec3,
}

// =============================================================================
// LOADING AND RESOLUTION
// =============================================================================

impl TileProperties {
    /// Parses and validates a JSON tile request.
    pub fn from_json(json: &str) -> Result<Self, TileError> {
        let props: TileProperties = serde_json::from_str(json)?;
        props.validate()?;
        Ok(props)
    }

    /// Returns a copy with the blueprint's fixed dimensions applied.
    ///
    /// OpenLOCK walls get the standard base and core depth, OpenLOCK floors
    /// the standard base and tile heights. Tiles without a base get a zero
    /// base height.
    pub fn resolved(&self) -> TileProperties {
        let mut props = self.clone();
        match (&mut props.shape, self.blueprint) {
            (TileShape::Rectangular(p), Blueprint::OpenLock) => match p.kind {
                RectangularKind::Wall => {
                    p.base_size = DVec3::new(p.tile_size.x, OPENLOCK_WALL_BASE_Y, OPENLOCK_WALL_BASE_Z);
                    p.tile_size.y = OPENLOCK_WALL_CORE_Y;
                }
                RectangularKind::Floor => {
                    p.base_size = DVec3::new(p.tile_size.x, p.tile_size.y, OPENLOCK_FLOOR_BASE_Z);
                    p.tile_size.z = OPENLOCK_FLOOR_TILE_Z;
                }
            },
            (TileShape::Curved(p), Blueprint::OpenLock) => match p.form {
                CurvedForm::Wall { .. } => {
                    p.base_size.y = OPENLOCK_WALL_BASE_Y;
                    p.base_size.z = OPENLOCK_WALL_BASE_Z;
                    p.tile_size.y = OPENLOCK_WALL_CORE_Y;
                }
                CurvedForm::Floor { .. } => {
                    p.base_size.z = OPENLOCK_FLOOR_BASE_Z;
                    p.tile_size.z = OPENLOCK_FLOOR_TILE_Z;
                }
            },
            (TileShape::Triangular(p), Blueprint::OpenLock) => {
                p.base_height = OPENLOCK_FLOOR_BASE_Z;
                p.tile_height = OPENLOCK_FLOOR_TILE_Z;
            }
            (TileShape::Corner(p), Blueprint::OpenLock) => {
                p.base_size.y = OPENLOCK_WALL_BASE_Y;
                p.base_size.z = OPENLOCK_WALL_BASE_Z;
                p.tile_size.y = OPENLOCK_WALL_CORE_Y;
            }
            (TileShape::Rectangular(p), Blueprint::None) => p.base_size = DVec3::ZERO,
            (TileShape::Curved(p), Blueprint::None) => p.base_size = DVec3::ZERO,
            (TileShape::Triangular(p), Blueprint::None) => p.base_height = 0.0,
            (TileShape::Corner(p), Blueprint::None) => p.base_size = DVec3::ZERO,
            (_, Blueprint::Plain) => {}
        }
        props
    }

    /// Checks the request describes a buildable tile.
    pub fn validate(&self) -> Result<(), TileError> {
        if self.tile_name.trim().is_empty() {
            return Err(TileError::invalid("tile name is empty"));
        }
        if !self.buffer.is_finite() || self.buffer < 0.0 {
            return Err(TileError::invalid(format!(
                "trim buffer must be non-negative: {}",
                self.buffer
            )));
        }

        let resolved = self.resolved();
        match &resolved.shape {
            TileShape::Rectangular(p) => {
                require_size("tile_size", p.tile_size)?;
                if self.blueprint != Blueprint::None {
                    require_size("base_size", p.base_size)?;
                    require_below("base height", p.base_size.z, "tile height", p.tile_size.z)?;
                }
            }
            TileShape::Curved(p) => {
                require_positive("radius", p.radius)?;
                require_size("tile_size", p.tile_size)?;
                if p.segments == 0 {
                    return Err(TileError::invalid("segments must be at least 1"));
                }
                match p.form {
                    CurvedForm::Wall { degrees_of_arc } => {
                        if approx_zero(degrees_of_arc) || degrees_of_arc.abs() >= 360.0 {
                            return Err(TileError::invalid(format!(
                                "degrees_of_arc must lie inside (-360, 360) and not be 0: {degrees_of_arc}"
                            )));
                        }
                        let depth = if self.blueprint == Blueprint::None {
                            p.tile_size.y
                        } else {
                            p.base_size.y
                        };
                        if depth / 2.0 >= p.radius {
                            return Err(TileError::invalid(format!(
                                "wall depth {depth} does not fit inside radius {}",
                                p.radius
                            )));
                        }
                    }
                    CurvedForm::Floor { angle, .. } => require_angle(angle)?,
                }
                if self.blueprint != Blueprint::None {
                    require_below("base height", p.base_size.z, "tile height", p.tile_size.z)?;
                }
            }
            TileShape::Triangular(p) => {
                require_positive("leg_1", p.leg_1)?;
                require_positive("leg_2", p.leg_2)?;
                require_angle(p.angle)?;
                require_positive("tile_height", p.tile_height)?;
                if self.blueprint != Blueprint::None {
                    require_below("base height", p.base_height, "tile height", p.tile_height)?;
                }
            }
            TileShape::Corner(p) => {
                require_positive("leg_1_len", p.leg_1_len)?;
                require_positive("leg_2_len", p.leg_2_len)?;
                require_angle(p.angle)?;
                require_size("tile_size", p.tile_size)?;
                if self.blueprint != Blueprint::None {
                    require_size("base_size", DVec3::new(1.0, p.base_size.y, p.base_size.z))?;
                    require_below("base height", p.base_size.z, "tile height", p.tile_size.z)?;
                }
            }
        }
        Ok(())
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), TileError> {
    if !value.is_finite() || value <= EPSILON {
        return Err(TileError::invalid(format!("{name} must be positive: {value}")));
    }
    Ok(())
}

fn require_size(name: &str, size: DVec3) -> Result<(), TileError> {
    if !size.is_finite() || size.min_element() <= EPSILON {
        return Err(TileError::invalid(format!(
            "{name} must be positive in every axis: {size}"
        )));
    }
    Ok(())
}

fn require_angle(angle: f64) -> Result<(), TileError> {
    if !angle.is_finite() || angle <= EPSILON || angle >= 180.0 {
        return Err(TileError::invalid(format!(
            "angle must lie inside (0, 180): {angle}"
        )));
    }
    Ok(())
}

fn require_below(name: &str, value: f64, limit_name: &str, limit: f64) -> Result<(), TileError> {
    if value >= limit {
        return Err(TileError::invalid(format!(
            "{name} {value} must be below {limit_name} {limit}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_wall(blueprint: Blueprint) -> TileProperties {
        TileProperties {
            tile_name: "wall".into(),
            buffer: DEFAULT_TRIM_BUFFER,
            blueprint,
            shape: TileShape::Rectangular(RectangularTileProps {
                tile_size: DVec3::new(2.0, 0.5, 2.0),
                base_size: DVec3::new(2.0, 0.5, 0.25),
                kind: RectangularKind::Wall,
            }),
        }
    }

    #[test]
    fn test_from_json_defaults() {
        let props = TileProperties::from_json(
            r#"{
                "tile_name": "floor",
                "shape": { "type": "rectangular", "tile_size": [2.0, 2.0, 0.3] }
            }"#,
        )
        .unwrap();
        assert_eq!(props.buffer, DEFAULT_TRIM_BUFFER);
        assert_eq!(props.blueprint, Blueprint::OpenLock);
        let TileShape::Rectangular(rect) = &props.shape else {
            panic!("expected a rectangular tile");
        };
        assert_eq!(rect.kind, RectangularKind::Floor);
    }

    #[test]
    fn test_from_json_curved_floor() {
        let props = TileProperties::from_json(
            r#"{
                "tile_name": "quarter",
                "buffer": 0.01,
                "blueprint": "plain",
                "shape": {
                    "type": "curved",
                    "radius": 3.0,
                    "tile_size": [3.0, 3.0, 0.4],
                    "base_size": [3.0, 3.0, 0.2],
                    "form": { "form": "floor", "angle": 90.0, "curve_type": "NEG" }
                }
            }"#,
        )
        .unwrap();
        let TileShape::Curved(curved) = &props.shape else {
            panic!("expected a curved tile");
        };
        assert_eq!(curved.segments, DEFAULT_CURVE_SEGMENTS);
        assert_eq!(
            curved.form,
            CurvedForm::Floor {
                angle: 90.0,
                curve_type: CurveType::Neg
            }
        );
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = TileProperties::from_json(r#"{ "tile_name": "x" }"#).unwrap_err();
        assert!(matches!(err, TileError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = TileProperties::from_json(
            r#"{
                "tile_name": "tri",
                "blueprint": "none",
                "shape": {
                    "type": "triangular",
                    "leg_1": 2.0, "leg_2": 2.0, "angle": 180.0, "tile_height": 1.0
                }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TileError::InvalidProperties { .. }));
    }

    #[test]
    fn test_resolved_openlock_wall() {
        let props = straight_wall(Blueprint::OpenLock).resolved();
        let TileShape::Rectangular(rect) = props.shape else {
            panic!("expected a rectangular tile");
        };
        assert_relative_eq!(rect.base_size.y, OPENLOCK_WALL_BASE_Y);
        assert_relative_eq!(rect.base_size.z, OPENLOCK_WALL_BASE_Z);
        assert_relative_eq!(rect.tile_size.y, OPENLOCK_WALL_CORE_Y);
        assert_relative_eq!(rect.tile_size.z, 2.0);
    }

    #[test]
    fn test_resolved_plain_is_unchanged() {
        let props = straight_wall(Blueprint::Plain);
        assert_eq!(props.resolved(), props);
    }

    #[test]
    fn test_resolved_none_drops_base() {
        let props = straight_wall(Blueprint::None).resolved();
        let TileShape::Rectangular(rect) = props.shape else {
            panic!("expected a rectangular tile");
        };
        assert_eq!(rect.base_size, DVec3::ZERO);
    }

    #[test]
    fn test_validate_rejects_negative_buffer() {
        let mut props = straight_wall(Blueprint::Plain);
        props.buffer = -0.1;
        assert!(props.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_base_taller_than_tile() {
        let mut props = straight_wall(Blueprint::Plain);
        if let TileShape::Rectangular(rect) = &mut props.shape {
            rect.base_size.z = 3.0;
        }
        assert!(props.validate().is_err());
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(straight_wall(Blueprint::Plain).shape.name(), "straight wall");
    }
}
