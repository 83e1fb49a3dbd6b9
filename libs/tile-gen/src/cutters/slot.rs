//! The OpenLOCK slot running along a straight wall base.

use config::constants::{SLOT_END_MARGIN, SLOT_FACE_OFFSET, SLOT_HEIGHT, SLOT_WIDTH, Z_FIGHT_OFFSET};
use glam::DVec3;
use tile_mesh::{Mesh, MeshError};

use crate::tiles::boxed;

/// Slot box for a base `base_x` long whose bottom is at `z`, or `None` if
/// the base is too short to hold one.
pub(crate) fn slot_mesh(base_x: f64, z: f64) -> Result<Option<Mesh>, MeshError> {
    let length = base_x - 2.0 * SLOT_END_MARGIN;
    if length <= 0.0 {
        return Ok(None);
    }
    let mesh = boxed(
        DVec3::new(-length / 2.0, -SLOT_FACE_OFFSET, z - Z_FIGHT_OFFSET),
        DVec3::new(length, SLOT_WIDTH, SLOT_HEIGHT),
    )?;
    Ok(Some(mesh))
}
