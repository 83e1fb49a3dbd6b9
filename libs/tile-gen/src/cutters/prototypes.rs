//! Cutter prototypes.
//!
//! Every placed cutter is a copy of one prototype mesh. Hosts that ship
//! their own cutter shapes implement [`PrototypeLibrary`]; the procedural
//! library builds plain boxes from the OpenLOCK constants.

use config::constants::{
    CLIP_CUTTER_DEPTH, CLIP_CUTTER_ELEVATION, CLIP_CUTTER_HEIGHT, CLIP_CUTTER_LENGTH, CLIP_INSET,
    WALL_SIDE_CUTTER_DEPTH, WALL_SIDE_CUTTER_SIZE, Z_FIGHT_OFFSET,
};
use glam::DVec3;
use tile_mesh::Mesh;

use crate::error::TileError;
use crate::tiles::boxed;

/// Source of cutter prototype meshes.
pub trait PrototypeLibrary {
    /// One clip cutter unit.
    ///
    /// The local origin sits [`CLIP_INSET`] inside the base edge. Local X
    /// runs along the edge from 0, local Y into the base, local Z up from
    /// the base bottom. The unit must reach back across the edge at
    /// `y = -CLIP_INSET` so the clip channel opens onto the edge face.
    fn clip_cutter(&self) -> Result<Mesh, TileError>;

    /// One wall side cutter.
    ///
    /// Local X runs into the core from its end face at 0, local Y across
    /// the wall from 0, local Z up from 0.
    fn wall_side_cutter(&self) -> Result<Mesh, TileError>;
}

/// Box-shaped prototypes built from the OpenLOCK constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralPrototypes;

impl PrototypeLibrary for ProceduralPrototypes {
    fn clip_cutter(&self) -> Result<Mesh, TileError> {
        // channel from just outside the edge face to the pocket's back wall
        let mouth = CLIP_INSET + Z_FIGHT_OFFSET;
        Ok(boxed(
            DVec3::new(0.0, -mouth, CLIP_CUTTER_ELEVATION),
            DVec3::new(CLIP_CUTTER_LENGTH, mouth + CLIP_CUTTER_DEPTH, CLIP_CUTTER_HEIGHT),
        )?)
    }

    fn wall_side_cutter(&self) -> Result<Mesh, TileError> {
        // starts just outside the end face
        Ok(boxed(
            DVec3::new(-Z_FIGHT_OFFSET, 0.0, 0.0),
            DVec3::new(
                WALL_SIDE_CUTTER_DEPTH + Z_FIGHT_OFFSET,
                WALL_SIDE_CUTTER_SIZE,
                WALL_SIDE_CUTTER_SIZE,
            ),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_procedural_clip_cutter() {
        let mesh = ProceduralPrototypes.clip_cutter().unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, CLIP_CUTTER_ELEVATION);
        assert_relative_eq!(max.x, CLIP_CUTTER_LENGTH);
        assert_relative_eq!(max.y, CLIP_CUTTER_DEPTH, epsilon = 1e-12);
        assert_relative_eq!(min.y, -(CLIP_INSET + Z_FIGHT_OFFSET), epsilon = 1e-12);
        assert!(mesh.check_manifold().is_ok());
    }

    #[test]
    fn test_procedural_side_cutter_overshoots_end_face() {
        let mesh = ProceduralPrototypes.wall_side_cutter().unwrap();
        let (min, max) = mesh.bounding_box();
        assert!(min.x < 0.0);
        assert_relative_eq!(max.x, WALL_SIDE_CUTTER_DEPTH, epsilon = 1e-12);
        assert_relative_eq!(max.z, WALL_SIDE_CUTTER_SIZE);
    }
}
