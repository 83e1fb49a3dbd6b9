//! Triangular floors: one slab per side, and top and bottom prisms over the
//! triangle grown outward.

use config::constants::TRIANGLE_Z_TRIM_NUDGE;
use glam::DVec3;
use tile_mesh::primitives::extrude_outline;
use tile_mesh::{Cursor, TriangleDimensions};

use super::{edge_trimmer, Trim, TrimVolume};
use crate::error::TileError;

pub(super) fn trimmers(
    trim: Trim,
    dims: &TriangleDimensions,
    height: f64,
) -> Result<Vec<TrimVolume>, TileError> {
    let mut volumes = Vec::with_capacity(5);
    for edge in dims.edges() {
        let mesh = edge_trimmer(
            trim,
            edge.start,
            edge.end,
            edge.start_angle,
            edge.end_angle,
            height,
        )?;
        volumes.push(TrimVolume::new(format!("side_{}", edge.side.name()), mesh));
    }

    let grown = dims.offset(trim.buffer + TRIANGLE_Z_TRIM_NUDGE);
    let at = |z: f64| grown.map(|p| DVec3::new(p.x, p.y, z));
    let mut cursor = Cursor::default();
    volumes.push(TrimVolume::new(
        "z_pos",
        extrude_outline(&mut cursor, &at(height), trim.depth())?,
    ));
    volumes.push(TrimVolume::new(
        "z_neg",
        extrude_outline(&mut cursor, &at(0.0), -trim.depth())?,
    ));
    Ok(volumes)
}
