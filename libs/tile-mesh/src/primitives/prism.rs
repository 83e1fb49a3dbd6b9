//! # Prism Primitives
//!
//! Triangular prisms from SAS dimensions, and prisms over arbitrary closed
//! outlines.

use glam::DVec3;

use super::require_extent;
use crate::error::MeshError;
use crate::mesh::{newell_normal, Mesh};
use crate::triangle::{solve_triangle_at, TriangleDimensions};
use crate::turtle::{Cursor, Turtle};

/// Creates a triangular prism with vertex A at the origin and leg `b` along
/// +Y.
///
/// Returns the mesh together with its solved dimensions, `height` included.
///
/// # Example
///
/// ```rust
/// use tile_mesh::primitives::triangular_prism;
///
/// let (mesh, dims) = triangular_prism(3.0, 4.0, 90.0, 2.0).unwrap();
/// assert_eq!(mesh.face_count(), 5);
/// assert_eq!(dims.height, Some(2.0));
/// assert!((mesh.volume() - 12.0).abs() < 1e-9);
/// ```
pub fn triangular_prism(
    leg_1: f64,
    leg_2: f64,
    angle: f64,
    height: f64,
) -> Result<(Mesh, TriangleDimensions), MeshError> {
    draw_triangular_prism(&mut Cursor::default(), leg_1, leg_2, angle, height)
}

/// Creates a triangular prism anchored at the cursor.
///
/// The outline is walked A → C → B with the turtle: forward along `b`, turn
/// right by `180 − C`, forward along `a`, then closed and filled before the
/// face is extruded along the cursor's up axis.
pub fn draw_triangular_prism(
    cursor: &mut Cursor,
    leg_1: f64,
    leg_2: f64,
    angle: f64,
    height: f64,
) -> Result<(Mesh, TriangleDimensions), MeshError> {
    require_extent("prism height", height)?;
    let dims = solve_triangle_at(leg_1, leg_2, angle, cursor)?.with_height(height);

    let mut mesh = Turtle::draft(cursor, |t| {
        t.add_vert();
        t.pen_down();
        t.fd(dims.b)?;
        t.rt(180.0 - dims.angle_c);
        t.fd(dims.a)?;
        t.close()?;
        t.fill()?;
        t.select_all();
        t.up(height)
    })?;
    mesh.recalculate_normals()?;
    Ok((mesh, dims))
}

/// Extrudes a closed outline by `height` along the cursor's up axis.
///
/// The outline is given in world space and should be star-shaped about its
/// first point.
pub fn extrude_outline(
    cursor: &mut Cursor,
    outline: &[DVec3],
    height: f64,
) -> Result<Mesh, MeshError> {
    require_extent("outline height", height)?;
    if outline.len() < 3 || newell_normal(outline) == DVec3::ZERO {
        return Err(MeshError::degenerate(format!(
            "outline of {} points encloses no area",
            outline.len()
        )));
    }

    let mut mesh = Turtle::draft(cursor, |t| {
        t.set_position(outline[0]);
        t.add_vert();
        t.pen_down();
        for point in &outline[1..] {
            t.goto(*point)?;
        }
        t.fill()?;
        t.select_all();
        t.up(height)
    })?;
    mesh.recalculate_normals()?;
    Ok(mesh)
}
