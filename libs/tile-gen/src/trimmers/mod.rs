//! # Trimmer Generator
//!
//! Oversized subtraction volumes, one per bounding face of a tile. Raw
//! blanks overshoot the intended silhouette by the trim buffer, so each
//! trimming face is placed at `blank boundary − buffer`, which is the
//! silhouette itself. Alongside its face every trimmer reaches
//! `buffer + TRIMMER_MARGIN` past the blank on each side, and it is
//! `buffer + TRIMMER_DEPTH` thick.
//!
//! Corner-wall legs are drawn at full length, so their leg trimmers sit at
//! `leg_len − buffer` instead.
//!
//! Trimmers are returned as hidden [`GeometryRole::Trimmer`] pieces parented
//! to the base. Nothing here applies a boolean.
//!
//! ## Example
//!
//! ```rust
//! use tile_gen::properties::TileProperties;
//! use tile_gen::generate_trimmers;
//!
//! let props = TileProperties::from_json(r#"{
//!     "tile_name": "floor",
//!     "blueprint": "plain",
//!     "shape": {
//!         "type": "rectangular",
//!         "tile_size": [2.0, 2.0, 0.5],
//!         "base_size": [2.0, 2.0, 0.25]
//!     }
//! }"#).unwrap();
//!
//! let trimmers = generate_trimmers(&props, None).unwrap();
//! assert_eq!(trimmers.len(), 6);
//! assert!(trimmers.iter().all(|t| t.hidden));
//! ```

mod corner;
mod curved;
mod rectangular;
mod triangular;

use config::constants::{TRIMMER_DEPTH, TRIMMER_MARGIN};
use glam::{DVec2, DVec3};
use tile_mesh::primitives::draw_cuboid;
use tile_mesh::{Cursor, Mesh, MeshError, TriangleDimensions};
use tracing::{debug, trace};

use crate::error::TileError;
use crate::piece::{subtractor_name, GeometryRole, TilePiece};
use crate::properties::{CurvedForm, TileProperties, TileShape};
use crate::tiles::{boxed, owner_name};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Generates the trimmers of a tile.
///
/// Triangular and curved floor tiles need the triangle the tile was built
/// on; other shapes ignore `dimensions`.
///
/// # Errors
///
/// [`TileError::MissingDimensions`] for a triangular or curved floor tile
/// without dimensions, or any drafting error.
pub fn generate_trimmers(
    props: &TileProperties,
    dimensions: Option<&TriangleDimensions>,
) -> Result<Vec<TilePiece>, TileError> {
    let props = props.resolved();
    let trim = Trim::new(props.buffer);
    let shape = props.shape.name();

    let volumes = match &props.shape {
        TileShape::Rectangular(p) => rectangular::trimmers(trim, props.blueprint, p)?,
        TileShape::Curved(p) => match p.form {
            CurvedForm::Wall { degrees_of_arc } => {
                curved::wall_trimmers(trim, props.blueprint, p, degrees_of_arc)?
            }
            CurvedForm::Floor { angle, curve_type } => {
                let dims = dimensions.ok_or(TileError::MissingDimensions { shape })?;
                curved::floor_trimmers(trim, p, dims, angle, curve_type)?
            }
        },
        TileShape::Triangular(p) => {
            let dims = dimensions.ok_or(TileError::MissingDimensions { shape })?;
            triangular::trimmers(trim, dims, p.tile_height)?
        }
        TileShape::Corner(p) => corner::trimmers(trim, props.blueprint, p)?,
    };

    let parent = owner_name(&props);
    let pieces: Vec<TilePiece> = volumes
        .into_iter()
        .map(|volume| {
            let name = subtractor_name("trimmer", &volume.face, &props.tile_name);
            trace!(trimmer = %name, bounds = ?volume.mesh.bounding_box(), "placed trimmer");
            TilePiece::new(name, GeometryRole::Trimmer, volume.mesh)
                .with_origin(volume.origin)
                .with_parent(parent.as_str())
        })
        .collect();

    debug!(
        tile = %props.tile_name,
        shape,
        count = pieces.len(),
        buffer = props.buffer,
        "generated trimmers"
    );
    Ok(pieces)
}

// =============================================================================
// SHARED GEOMETRY
// =============================================================================

/// Trim distances derived from the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Trim {
    /// Gap between blank and silhouette.
    pub buffer: f64,
}

impl Trim {
    pub fn new(buffer: f64) -> Self {
        Self { buffer }
    }

    /// How far a trimmer reaches past the silhouette alongside its face.
    pub fn pad(self) -> f64 {
        self.buffer + TRIMMER_MARGIN
    }

    /// Thickness of a trimmer measured outward from its face.
    pub fn depth(self) -> f64 {
        self.buffer + TRIMMER_DEPTH
    }

    /// Overshoot of a trimmer past an edge end whose corner has
    /// `angle` degrees: the blank's corner reaches `buffer / tan(angle/2)`
    /// past the silhouette's, plus the usual pad.
    pub fn corner_reach(self, angle: f64) -> f64 {
        self.buffer / (angle / 2.0).to_radians().tan() + self.pad()
    }
}

/// A trimmer before it is named and parented.
#[derive(Debug, Clone)]
pub(crate) struct TrimVolume {
    pub face: String,
    pub mesh: Mesh,
    pub origin: DVec3,
}

impl TrimVolume {
    pub fn new(face: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            face: face.into(),
            mesh,
            origin: DVec3::ZERO,
        }
    }

    pub fn about(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }
}

/// Top and bottom trimmers over an XY footprint of a tile `height` tall.
pub(crate) fn z_trimmers(
    trim: Trim,
    min: DVec2,
    max: DVec2,
    height: f64,
) -> Result<[TrimVolume; 2], MeshError> {
    let pad = trim.pad();
    let size = DVec3::new(max.x - min.x + 2.0 * pad, max.y - min.y + 2.0 * pad, trim.depth());
    let corner = |z: f64| DVec3::new(min.x - pad, min.y - pad, z);
    Ok([
        TrimVolume::new("z_pos", boxed(corner(height), size)?),
        TrimVolume::new("z_neg", boxed(corner(-trim.depth()), size)?),
    ])
}

/// Slab trimming the straight edge `start → end` of a tile whose interior
/// lies to the left of the edge seen from above.
///
/// The slab's inner face lies on the edge and it extends past each end by
/// [`Trim::corner_reach`] for the corner angle there.
pub(crate) fn edge_trimmer(
    trim: Trim,
    start: DVec3,
    end: DVec3,
    start_angle: f64,
    end_angle: f64,
    height: f64,
) -> Result<Mesh, MeshError> {
    let along = (end - start).normalize_or_zero();
    let before = trim.corner_reach(start_angle);
    let after = trim.corner_reach(end_angle);
    let corner = DVec3::new(start.x, start.y, 0.0) - along * before - DVec3::Z * trim.pad();
    draw_cuboid(
        &mut Cursor::facing(corner, along),
        DVec3::new(
            trim.depth(),
            start.distance(end) + before + after,
            height + 2.0 * trim.pad(),
        ),
    )
}

/// XY bounding box of a set of points.
pub(crate) fn footprint(points: impl IntoIterator<Item = DVec3>) -> (DVec2, DVec2) {
    points.into_iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(p.truncate()), max.max(p.truncate())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trim_distances() {
        let trim = Trim::new(0.1);
        assert_relative_eq!(trim.pad(), 0.6);
        assert_relative_eq!(trim.depth(), 0.6);
        // 2 × pad covers the 2 × buffer + 1 tangential padding
        assert!(2.0 * trim.pad() >= 2.0 * trim.buffer + 1.0 - 1e-12);
        assert_relative_eq!(trim.corner_reach(90.0), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_edge_trimmer_sits_outside_edge() {
        let trim = Trim::new(0.0);
        // edge along +Y with the interior on -X
        let mesh = edge_trimmer(trim, DVec3::ZERO, DVec3::Y * 4.0, 90.0, 90.0, 1.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, TRIMMER_DEPTH, epsilon = 1e-12);
        assert_relative_eq!(min.y, -TRIMMER_MARGIN, epsilon = 1e-12);
        assert_relative_eq!(max.y, 4.0 + TRIMMER_MARGIN, epsilon = 1e-12);
        assert_relative_eq!(min.z, -TRIMMER_MARGIN, epsilon = 1e-12);
    }

    #[test]
    fn test_z_trimmers_bracket_height() {
        let trim = Trim::new(0.5);
        let [top, bottom] =
            z_trimmers(trim, DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0), 2.0).unwrap();
        assert_eq!(top.face, "z_pos");
        let (min, max) = top.mesh.bounding_box();
        assert_relative_eq!(min.z, 2.0);
        assert_relative_eq!(max.z, 3.0);
        assert_relative_eq!(min.x, -2.0);
        let (min, max) = bottom.mesh.bounding_box();
        assert_relative_eq!(min.z, -1.0);
        assert_relative_eq!(max.z, 0.0);
    }

    #[test]
    fn test_footprint() {
        let (min, max) = footprint([DVec3::new(1.0, -2.0, 5.0), DVec3::new(-3.0, 4.0, 0.0)]);
        assert_eq!(min, DVec2::new(-3.0, -2.0));
        assert_eq!(max, DVec2::new(1.0, 4.0));
    }
}
