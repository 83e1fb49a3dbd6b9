//! Clip sockets cut into both ends of a straight wall core.

use config::constants::{
    WALL_SIDE_CUTTER_ELEVATION, WALL_SIDE_CUTTER_PITCH, WALL_SIDE_CUTTER_SIZE,
    WALL_SIDE_CUTTER_STAGGER,
};
use glam::DVec3;
use tile_mesh::Mesh;

use super::place;

/// Heights of the side cutters on a core whose top is at `top`, measured
/// from the tile bottom: two staggered series at a fixed pitch, each cutter
/// entirely below the top.
pub(crate) fn side_heights(top: f64) -> Vec<f64> {
    let mut heights = Vec::new();
    for start in [
        WALL_SIDE_CUTTER_ELEVATION,
        WALL_SIDE_CUTTER_ELEVATION + WALL_SIDE_CUTTER_STAGGER,
    ] {
        let mut z = start;
        while z + WALL_SIDE_CUTTER_SIZE <= top {
            heights.push(z);
            z += WALL_SIDE_CUTTER_PITCH;
        }
    }
    heights.sort_by(f64::total_cmp);
    heights
}

/// Side cutters at every height on the end face at `x`, centred across
/// the wall. `into` is `1.0` for the end at −X and `-1.0` for the end at +X.
pub(crate) fn side_column(prototype: &Mesh, x: f64, into: f64, heights: &[f64]) -> Mesh {
    let along = DVec3::X * into;
    let mut column = Mesh::with_capacity(
        prototype.vertex_count() * heights.len(),
        prototype.face_count() * heights.len(),
    );
    for &z in heights {
        let origin = DVec3::new(x, -into * WALL_SIDE_CUTTER_SIZE / 2.0, z);
        column.merge(&place(prototype, along, origin));
    }
    column
}
