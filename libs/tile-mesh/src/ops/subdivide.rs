//! # Simple Subdivision
//!
//! Refines a mesh without moving its surface: every face is fanned into
//! triangles and each pass splits every triangle into four at its edge
//! midpoints. Midpoints are shared between neighbouring triangles, so a
//! closed mesh stays closed and keeps its winding.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use tile_mesh::ops::subdivide;
//! use tile_mesh::primitives::cuboid;
//!
//! let block = cuboid(DVec3::ONE).unwrap();
//! let fine = subdivide(&block, 1).unwrap();
//! assert_eq!(fine.face_count(), 12 * 4);
//! assert!((fine.volume() - 1.0).abs() < 1e-12);
//! ```

use std::collections::HashMap;

use tracing::trace;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Returns `mesh` refined by `levels` midpoint passes.
///
/// Zero levels returns a copy with the faces fanned into triangles.
///
/// # Errors
///
/// [`MeshError::NonManifold`] if the refined mesh is not closed, which
/// only happens when the input was not.
pub fn subdivide(mesh: &Mesh, levels: u32) -> Result<Mesh, MeshError> {
    let mut vertices = mesh.vertices().to_vec();
    let mut triangles = mesh.triangles();

    for _ in 0..levels {
        let mut midpoints: HashMap<[u32; 2], u32> = HashMap::with_capacity(triangles.len() * 2);
        let mut midpoint = |a: u32, b: u32| -> u32 {
            let key = if a < b { [a, b] } else { [b, a] };
            *midpoints.entry(key).or_insert_with(|| {
                vertices.push((vertices[a as usize] + vertices[b as usize]) / 2.0);
                (vertices.len() - 1) as u32
            })
        };

        let mut refined = Vec::with_capacity(triangles.len() * 4);
        for [a, b, c] in triangles {
            let (ab, bc, ca) = (midpoint(a, b), midpoint(b, c), midpoint(c, a));
            refined.extend([[a, ab, ca], [ab, b, bc], [ca, bc, c], [ab, bc, ca]]);
        }
        triangles = refined;
    }

    let mut result = Mesh::with_capacity(vertices.len(), triangles.len());
    for position in vertices {
        result.add_vertex(position);
    }
    for triangle in &triangles {
        result.add_face(triangle);
    }
    if !mesh.is_empty() {
        result.check_manifold()?;
    }
    trace!(
        levels,
        vertices = result.vertex_count(),
        faces = result.face_count(),
        "subdivided mesh"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cuboid, curved_slab, triangular_prism};
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn test_subdivide_keeps_shape() {
        let block = cuboid(DVec3::new(2.0, 3.0, 4.0)).unwrap();
        let fine = subdivide(&block, 2).unwrap();
        assert_eq!(fine.face_count(), 12 * 16);
        assert_relative_eq!(fine.volume(), 24.0, epsilon = 1e-9);
        assert_eq!(fine.bounding_box(), block.bounding_box());
        assert!(fine.vertex_count() > block.vertex_count());
    }

    #[test]
    fn test_subdivide_shares_midpoints() {
        let (prism, _) = triangular_prism(3.0, 4.0, 90.0, 1.0).unwrap();
        let fine = subdivide(&prism, 1).unwrap();
        // closed triangle mesh: V − E + F = 2
        let euler = fine.vertex_count() as i64 - fine.edge_count() as i64 + fine.face_count() as i64;
        assert_eq!(euler, 2);
        assert!(fine.check_manifold().is_ok());
    }

    #[test]
    fn test_subdivide_curved_slab() {
        let slab = curved_slab(10.0, 90.0, 1.0, 2.0, 8).unwrap();
        let fine = subdivide(&slab, 1).unwrap();
        assert_relative_eq!(fine.volume(), slab.volume(), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_levels_only_fans() {
        let block = cuboid(DVec3::ONE).unwrap();
        let fanned = subdivide(&block, 0).unwrap();
        assert_eq!(fanned.vertex_count(), 8);
        assert_eq!(fanned.face_count(), 12);
    }

    #[test]
    fn test_subdivide_empty() {
        assert!(subdivide(&Mesh::new(), 3).unwrap().is_empty());
    }
}
