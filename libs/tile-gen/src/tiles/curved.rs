//! Curved walls and curved floors.
//!
//! A curved wall is a straight wall of length `radius × arc` bent around a
//! circle. The circle centre sits at `(0, ±radius)` so the wall centreline
//! passes through the origin, with the sweep split evenly either side of
//! the Y axis. Positive arcs bend toward +Y, negative arcs toward −Y.

use config::constants::DISPLACEMENT_SLAB_THICKNESS;
use glam::DVec3;
use tile_mesh::primitives::{draw_curved_floor, draw_curved_slab, CurveType};
use tile_mesh::{solve_triangle, Cursor, Mesh, MeshError, TriangleDimensions};

use super::{base_piece, core_piece, preview_thickness, slab_pair};
use crate::error::TileError;
use crate::piece::TilePiece;
use crate::properties::{Blueprint, CurvedTileProps};

// =============================================================================
// WALL ARC
// =============================================================================

/// The circle a curved wall is bent around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WallArc {
    /// Centreline radius.
    pub radius: f64,
    /// `1.0` for walls bending toward +Y, `-1.0` otherwise.
    pub sign: f64,
    /// Unsigned sweep in degrees.
    pub sweep: f64,
    /// Chords per sweep.
    pub segments: u32,
}

impl WallArc {
    pub fn new(radius: f64, degrees_of_arc: f64, segments: u32) -> Self {
        Self {
            radius,
            sign: if degrees_of_arc < 0.0 { -1.0 } else { 1.0 },
            sweep: degrees_of_arc.abs(),
            segments,
        }
    }

    pub fn centre(&self) -> DVec3 {
        DVec3::new(0.0, self.sign * self.radius, 0.0)
    }

    /// Length of the unbent centreline.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.to_radians()
    }

    /// Cursor on the circle centre at height `z`, facing the end of the wall
    /// a clockwise sweep starts from.
    pub fn cursor(&self, z: f64) -> Cursor {
        let (sin, cos) = (self.sweep / 2.0).to_radians().sin_cos();
        Cursor::facing(
            self.centre() + DVec3::Z * z,
            DVec3::new(sin, -cos, 0.0) * self.sign,
        )
    }

    /// Annular wedge spanning the whole wall, `width` deep inward from
    /// `outer_radius`.
    pub fn slab(
        &self,
        outer_radius: f64,
        width: f64,
        z: f64,
        height: f64,
    ) -> Result<Mesh, MeshError> {
        draw_curved_slab(
            &mut self.cursor(z),
            outer_radius,
            self.sweep,
            height,
            width,
            self.segments,
        )
    }

    /// Point at `radius` from the centre, `theta` radians along the wall
    /// from its midpoint.
    pub fn point(&self, radius: f64, theta: f64, z: f64) -> DVec3 {
        let (sin, cos) = theta.sin_cos();
        DVec3::new(
            radius * sin,
            self.sign * (self.radius - radius * cos),
            z,
        )
    }

    /// Bends a straight mesh laid out along X around the circle.
    ///
    /// `x` in `[-length/2, length/2]` maps onto `sweep_degrees`; `y` is the
    /// offset from the centreline, positive toward +Y before bending.
    pub fn bend(&self, mesh: &mut Mesh, sweep_degrees: f64) -> Result<(), MeshError> {
        let length = self.length();
        let sweep = sweep_degrees.to_radians();
        mesh.map_vertices(|v| {
            let theta = v.x / length * sweep;
            self.point(self.radius - self.sign * v.y, theta, v.z)
        });
        mesh.recalculate_normals()
    }
}

// =============================================================================
// WALLS
// =============================================================================

pub(super) fn build_wall(
    tile_name: &str,
    blueprint: Blueprint,
    props: &CurvedTileProps,
    degrees_of_arc: f64,
) -> Result<Vec<TilePiece>, TileError> {
    let arc = WallArc::new(props.radius, degrees_of_arc, props.segments);
    let has_base = blueprint != Blueprint::None;
    let r = props.radius;
    let base_y = if has_base { props.base_size.y } else { 0.0 };
    let base_z = if has_base { props.base_size.z } else { 0.0 };
    let core_y = props.tile_size.y;
    let upper = props.tile_size.z - base_z;

    let mut pieces = Vec::with_capacity(6);
    if has_base {
        let base = arc.slab(r + base_y / 2.0, base_y, 0.0, base_z)?;
        pieces.push(base_piece(tile_name, base).with_origin(arc.centre()));
    }
    let core = arc.slab(r + core_y / 2.0, core_y, base_z, upper)?;
    pieces.push(core_piece(tile_name, core).with_origin(arc.centre()));

    let t = preview_thickness(base_y, core_y);
    let outer = |thickness: f64| arc.slab(r + core_y / 2.0 + thickness, thickness, base_z, upper);
    let inner = |thickness: f64| arc.slab(r - core_y / 2.0, thickness, base_z, upper);
    pieces.extend(slab_pair(
        tile_name,
        Some("outer"),
        outer(t)?,
        outer(DISPLACEMENT_SLAB_THICKNESS)?,
    )?);
    pieces.extend(slab_pair(
        tile_name,
        Some("inner"),
        inner(t)?,
        inner(DISPLACEMENT_SLAB_THICKNESS)?,
    )?);
    Ok(pieces)
}

// =============================================================================
// FLOORS
// =============================================================================

pub(super) fn build_floor(
    tile_name: &str,
    blueprint: Blueprint,
    props: &CurvedTileProps,
    angle: f64,
    curve_type: CurveType,
) -> Result<(Vec<TilePiece>, TriangleDimensions), TileError> {
    let has_base = blueprint != Blueprint::None;
    let base_z = if has_base { props.base_size.z } else { 0.0 };
    let upper = props.tile_size.z - base_z;
    let floor = |z: f64, height: f64| {
        draw_curved_floor(
            &mut Cursor::at(DVec3::Z * z),
            props.radius,
            angle,
            height,
            props.segments,
            curve_type,
        )
        .map(|(mesh, _)| mesh)
    };

    let mut pieces = Vec::with_capacity(3);
    if has_base {
        pieces.push(base_piece(tile_name, floor(0.0, base_z)?));
    }
    pieces.extend(slab_pair(
        tile_name,
        None,
        floor(base_z, upper)?,
        floor(base_z, upper)?,
    )?);

    let dims = solve_triangle(props.radius, props.radius, angle)?.with_height(props.tile_size.z);
    Ok((pieces, dims))
}
