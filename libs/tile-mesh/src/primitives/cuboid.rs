//! # Cuboid Primitive
//!
//! A box drafted by extruding a vertex along X, the resulting edge along Y
//! and the resulting face along Z.

use glam::DVec3;

use super::require_extent;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::turtle::{Cursor, Turtle};

/// Creates a cuboid with one corner at the origin.
///
/// # Example
///
/// ```rust
/// use tile_mesh::primitives::cuboid;
/// use glam::DVec3;
///
/// let mesh = cuboid(DVec3::new(2.0, 3.0, 4.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.edge_count(), 12);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn cuboid(size: DVec3) -> Result<Mesh, MeshError> {
    draw_cuboid(&mut Cursor::default(), size)
}

/// Creates a cuboid with one corner at the cursor, extending along the
/// cursor's right, forward and up axes.
///
/// Negative components extend the other way.
pub fn draw_cuboid(cursor: &mut Cursor, size: DVec3) -> Result<Mesh, MeshError> {
    require_extent("cuboid x", size.x)?;
    require_extent("cuboid y", size.y)?;
    require_extent("cuboid z", size.z)?;

    let mut mesh = Turtle::draft(cursor, |t| {
        t.add_vert();
        t.pen_down();
        t.ri(size.x)?;
        t.select_all();
        t.fd(size.y)?;
        t.select_all();
        t.up(size.z)
    })?;
    mesh.recalculate_normals()?;
    Ok(mesh)
}
