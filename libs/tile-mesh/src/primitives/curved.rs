//! # Curved Primitives
//!
//! Annular wedges for curved walls and quarter-round floors.

use config::constants::EPSILON;
use serde::{Deserialize, Serialize};

use super::require_extent;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::triangle::{solve_triangle_at, TriangleDimensions};
use crate::turtle::{Cursor, Turtle};

/// Which way a curved floor's arc bows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurveType {
    /// Convex: a pie sector whose arc bulges away from the corner.
    #[default]
    Pos,
    /// Concave: the arc is bitten out of the corner's far side.
    Neg,
}

/// Creates an annular wedge centred on the origin.
///
/// See [`draw_curved_slab`].
///
/// # Example
///
/// ```rust
/// use tile_mesh::primitives::curved_slab;
///
/// let mesh = curved_slab(10.0, 90.0, 5.0, 2.0, 8).unwrap();
/// assert_eq!(mesh.face_count(), 34);
/// ```
pub fn curved_slab(
    radius: f64,
    arc_degrees: f64,
    height: f64,
    width: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    draw_curved_slab(&mut Cursor::default(), radius, arc_degrees, height, width, segments)
}

/// Creates an annular wedge centred on the cursor.
///
/// The outer arc has `radius`, the inner arc `radius − width`, both with
/// `segments` chords starting on the cursor's forward axis and sweeping
/// `arc_degrees` clockwise. Negative sweeps mirror the wedge to the other
/// side of the forward axis.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] if the width is not inside
/// `(0, radius)`, the sweep is zero or a full turn or more, or the height is
/// zero.
pub fn draw_curved_slab(
    cursor: &mut Cursor,
    radius: f64,
    arc_degrees: f64,
    height: f64,
    width: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    require_extent("slab height", height)?;
    if width <= EPSILON || width >= radius || !width.is_finite() {
        return Err(MeshError::degenerate(format!(
            "slab width {width} must lie inside (0, {radius})"
        )));
    }
    if arc_degrees.abs() >= 360.0 {
        return Err(MeshError::degenerate(format!(
            "slab sweep must be less than a full turn: {arc_degrees}"
        )));
    }

    let mut mesh = Turtle::draft(cursor, |t| {
        let outer = t.arc(radius, arc_degrees, segments)?;
        let inner = t.arc(radius - width, arc_degrees, segments)?;
        t.bridge(&outer, &inner)?;
        t.select_all();
        t.pen_down();
        t.up(height)
    })?;
    mesh.recalculate_normals()?;
    Ok(mesh)
}

/// Creates a curved floor with its corner at the origin.
///
/// See [`draw_curved_floor`].
pub fn curved_floor(
    radius: f64,
    angle: f64,
    height: f64,
    segments: u32,
    curve_type: CurveType,
) -> Result<(Mesh, TriangleDimensions), MeshError> {
    draw_curved_floor(&mut Cursor::default(), radius, angle, height, segments, curve_type)
}

/// Creates a curved floor with its corner at the cursor.
///
/// Both straight legs have length `radius` and meet at `angle`; the legs are
/// the `b` and `c` sides of the returned isosceles dimensions. A
/// [`CurveType::Pos`] floor joins the leg ends with an arc centred on the
/// corner. A [`CurveType::Neg`] floor joins them with an arc of the same
/// radius centred on the far corner of the rhombus the legs span.
pub fn draw_curved_floor(
    cursor: &mut Cursor,
    radius: f64,
    angle: f64,
    height: f64,
    segments: u32,
    curve_type: CurveType,
) -> Result<(Mesh, TriangleDimensions), MeshError> {
    require_extent("floor height", height)?;
    let dims = solve_triangle_at(radius, radius, angle, cursor)?.with_height(height);

    let mut mesh = Turtle::draft(cursor, |t| {
        let corner = t.add_vert();
        let arc = match curve_type {
            CurveType::Pos => t.arc(radius, angle, segments)?,
            CurveType::Neg => {
                let far = dims.loc_b + dims.loc_c - dims.loc_a;
                t.set_position(far);
                t.face_towards(dims.loc_b - far);
                t.arc(radius, angle, segments)?
            }
        };
        let mut outline = Vec::with_capacity(arc.len() + 1);
        outline.push(corner);
        outline.extend(arc);
        t.fill_loop(&outline)?;
        t.pen_down();
        t.up(height)
    })?;
    mesh.recalculate_normals()?;
    Ok((mesh, dims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn ring_at(mesh: &Mesh, radius: f64) -> Vec<DVec3> {
        mesh.vertices()
            .iter()
            .copied()
            .filter(|v| v.z.abs() < 1e-12 && (v.truncate().length() - radius).abs() < 1e-9)
            .collect()
    }

    #[test]
    fn test_curved_slab_reference_case() {
        let mesh = curved_slab(10.0, 90.0, 5.0, 2.0, 8).unwrap();
        let outer = ring_at(&mesh, 10.0);
        let inner = ring_at(&mesh, 8.0);
        // 8 chords on each arc
        assert_eq!(outer.len(), 9);
        assert_eq!(inner.len(), 9);

        let first = outer[0].truncate().normalize();
        let last = outer[8].truncate().normalize();
        assert_relative_eq!(first.angle_between(last).to_degrees(), 90.0, epsilon = 1e-9);

        let swept: f64 = outer
            .windows(2)
            .map(|w| w[0].truncate().angle_between(w[1].truncate()).to_degrees())
            .sum();
        assert_relative_eq!(swept, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_curved_slab_topology() {
        let mesh = curved_slab(10.0, 90.0, 5.0, 2.0, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.edge_count(), 68);
        assert_eq!(mesh.face_count(), 34);
        assert!(mesh.check_manifold().is_ok());
    }

    #[test]
    fn test_curved_slab_volume() {
        let mesh = curved_slab(10.0, 90.0, 5.0, 2.0, 8).unwrap();
        let chord = 90.0_f64.to_radians() / 8.0;
        let area = 8.0 * 0.5 * chord.sin() * (100.0 - 64.0);
        assert_relative_eq!(mesh.volume(), area * 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_curved_slab_negative_sweep_mirrors() {
        let pos = curved_slab(4.0, 60.0, 1.0, 1.0, 6).unwrap();
        let neg = curved_slab(4.0, -60.0, 1.0, 1.0, 6).unwrap();
        let (pos_min, pos_max) = pos.bounding_box();
        let (neg_min, neg_max) = neg.bounding_box();
        assert_relative_eq!(pos_max.x, -neg_min.x, epsilon = 1e-12);
        assert_relative_eq!(pos_min.x, -neg_max.x, epsilon = 1e-12);
        assert_relative_eq!(pos.volume(), neg.volume(), epsilon = 1e-9);
    }

    #[test]
    fn test_curved_slab_rejects_bad_width() {
        assert!(curved_slab(2.0, 90.0, 1.0, 2.0, 4).is_err());
        assert!(curved_slab(2.0, 90.0, 1.0, 0.0, 4).is_err());
        assert!(curved_slab(2.0, 360.0, 1.0, 1.0, 4).is_err());
    }

    #[test]
    fn test_curved_floor_pos_is_sector() {
        let (mesh, dims) = curved_floor(3.0, 90.0, 0.5, 16, CurveType::Pos).unwrap();
        assert_eq!(mesh.face_count(), 2 + 17);
        let chord = 90.0_f64.to_radians() / 16.0;
        let area = 16.0 * 0.5 * 9.0 * chord.sin();
        assert_relative_eq!(mesh.volume(), area * 0.5, epsilon = 1e-9);
        assert_relative_eq!(dims.b, 3.0);
        assert!(mesh.check_manifold().is_ok());
    }

    #[test]
    fn test_curved_floor_neg_is_bitten_rhombus() {
        let (mesh, dims) = curved_floor(3.0, 90.0, 0.5, 16, CurveType::Neg).unwrap();
        let chord = 90.0_f64.to_radians() / 16.0;
        let bite = 16.0 * 0.5 * 9.0 * chord.sin();
        assert_relative_eq!(mesh.volume(), (9.0 - bite) * 0.5, epsilon = 1e-9);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, dims.loc_b.x, epsilon = 1e-12);
        assert_relative_eq!(max.y, dims.loc_c.y, epsilon = 1e-12);
    }
}
