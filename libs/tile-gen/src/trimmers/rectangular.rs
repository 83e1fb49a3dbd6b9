//! Straight walls and rectangular floors: six box trimmers around the
//! centred silhouette.

use glam::DVec3;

use super::{z_trimmers, Trim, TrimVolume};
use crate::error::TileError;
use crate::properties::{Blueprint, RectangularTileProps};
use crate::tiles::boxed;

pub(super) fn trimmers(
    trim: Trim,
    blueprint: Blueprint,
    props: &RectangularTileProps,
) -> Result<Vec<TrimVolume>, TileError> {
    let silhouette = silhouette(blueprint, props);
    let half = silhouette.truncate() / 2.0;
    let height = silhouette.z;
    let (pad, depth) = (trim.pad(), trim.depth());

    let across_x = DVec3::new(depth, silhouette.y + 2.0 * pad, height + 2.0 * pad);
    let across_y = DVec3::new(silhouette.x + 2.0 * pad, depth, height + 2.0 * pad);

    let mut volumes = vec![
        TrimVolume::new(
            "x_neg",
            boxed(DVec3::new(-half.x - depth, -half.y - pad, -pad), across_x)?,
        ),
        TrimVolume::new(
            "x_pos",
            boxed(DVec3::new(half.x, -half.y - pad, -pad), across_x)?,
        ),
        TrimVolume::new(
            "y_neg",
            boxed(DVec3::new(-half.x - pad, -half.y - depth, -pad), across_y)?,
        ),
        TrimVolume::new(
            "y_pos",
            boxed(DVec3::new(-half.x - pad, half.y, -pad), across_y)?,
        ),
    ];
    volumes.extend(z_trimmers(trim, -half, half, height)?);
    Ok(volumes)
}

/// Size of the finished tile, centred in XY with its bottom on `z = 0`.
fn silhouette(blueprint: Blueprint, props: &RectangularTileProps) -> DVec3 {
    let tile = props.tile_size;
    if blueprint == Blueprint::None {
        return tile;
    }
    let base = props.base_size;
    DVec3::new(tile.x.max(base.x), tile.y.max(base.y), tile.z)
}
