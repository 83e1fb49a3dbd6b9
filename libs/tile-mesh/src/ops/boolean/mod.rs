//! # Boolean Difference
//!
//! Subtracts one closed mesh from another with BSP trees, following the
//! csg.js construction: `A − B = ¬(¬A ∪ B)`.
//!
//! Faces are fanned into triangles on the way in. The result keeps the
//! convex fragments the trees produce as its faces, with coincident
//! vertices welded, so it carries the same signed volume and bounds as the
//! exact difference but may contain T-junctions.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use tile_mesh::ops::difference;
//! use tile_mesh::primitives::cuboid;
//!
//! let block = cuboid(DVec3::splat(2.0)).unwrap();
//! let mut bite = cuboid(DVec3::ONE).unwrap();
//! bite.translate(DVec3::splat(1.5));
//!
//! let result = difference(&block, &bite);
//! assert!((result.volume() - 7.875).abs() < 1e-9);
//! ```

mod bsp;
mod plane;
mod polygon;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use tracing::trace;

use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Returns `a` with the volume of `b` removed.
///
/// An empty `a` yields an empty mesh and an empty `b` yields a copy of `a`.
/// Meshes whose bounding boxes do not touch skip the tree work entirely.
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    if a.is_empty() || b.is_empty() || !bounds_overlap(a, b) {
        return a.clone();
    }
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);
    if polys_a.is_empty() {
        return Mesh::new();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    for poly in &mut result {
        poly.flip();
    }

    trace!(polygons = result.len(), "boolean difference evaluated");
    polygons_to_mesh(&result)
}

/// Subtracts each operand from `base` in order.
pub fn difference_all<'m>(base: &Mesh, operands: impl IntoIterator<Item = &'m Mesh>) -> Mesh {
    operands
        .into_iter()
        .fold(base.clone(), |acc, operand| difference(&acc, operand))
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

fn bounds_overlap(a: &Mesh, b: &Mesh) -> bool {
    let (a_min, a_max) = a.bounding_box();
    let (b_min, b_max) = b.bounding_box();
    a_min.cmple(b_max).all() && b_min.cmple(a_max).all()
}

/// Fans every face into triangles, dropping slivers with no plane.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangles()
        .into_iter()
        .filter_map(|[a, b, c]| {
            Polygon::new(vec![mesh.vertex(a), mesh.vertex(b), mesh.vertex(c)])
        })
        .collect()
}

/// Rebuilds a mesh from polygons, welding vertices closer than
/// [`VERTEX_MERGE_EPSILON`].
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::with_capacity(polygons.len() * 2, polygons.len());
    let mut welded: HashMap<[i64; 3], u32> = HashMap::new();

    for poly in polygons {
        let mut face: Vec<u32> = Vec::with_capacity(poly.vertices.len());
        for &v in &poly.vertices {
            let index = *welded
                .entry(weld_key(v))
                .or_insert_with(|| mesh.add_vertex(v));
            if face.last() != Some(&index) {
                face.push(index);
            }
        }
        if face.len() > 1 && face.first() == face.last() {
            face.pop();
        }
        if face.len() >= 3 {
            mesh.add_face(&face);
        }
    }

    mesh
}

fn weld_key(v: DVec3) -> [i64; 3] {
    let q = (v / VERTEX_MERGE_EPSILON).round();
    [q.x as i64, q.y as i64, q.z as i64]
}
