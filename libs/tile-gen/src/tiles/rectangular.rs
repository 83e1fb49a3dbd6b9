//! Straight walls and rectangular floors, centred on the origin in XY.

use config::constants::DISPLACEMENT_SLAB_THICKNESS;
use glam::DVec3;

use super::{base_piece, boxed, core_piece, preview_thickness, slab_pair};
use crate::error::TileError;
use crate::piece::TilePiece;
use crate::properties::{Blueprint, RectangularKind, RectangularTileProps};

pub(super) fn build(
    tile_name: &str,
    blueprint: Blueprint,
    props: &RectangularTileProps,
) -> Result<Vec<TilePiece>, TileError> {
    let has_base = blueprint != Blueprint::None;
    let base = props.base_size;
    let tile = props.tile_size;
    let base_z = if has_base { base.z } else { 0.0 };
    let upper = tile.z - base_z;

    let mut pieces = Vec::with_capacity(6);
    if has_base {
        let mesh = boxed(DVec3::new(-base.x / 2.0, -base.y / 2.0, 0.0), base)?;
        pieces.push(base_piece(tile_name, mesh));
    }

    match props.kind {
        RectangularKind::Wall => {
            let core_y = tile.y;
            let x0 = -tile.x / 2.0;
            let core = boxed(
                DVec3::new(x0, -core_y / 2.0, base_z),
                DVec3::new(tile.x, core_y, upper),
            )?;
            pieces.push(core_piece(tile_name, core));

            let face_slab = |thickness: f64, outer: bool| {
                let y0 = if outer { core_y / 2.0 } else { -core_y / 2.0 - thickness };
                boxed(
                    DVec3::new(x0, y0, base_z),
                    DVec3::new(tile.x, thickness, upper),
                )
            };
            let t = preview_thickness(if has_base { base.y } else { 0.0 }, core_y);
            for (side, outer) in [("outer", true), ("inner", false)] {
                pieces.extend(slab_pair(
                    tile_name,
                    Some(side),
                    face_slab(t, outer)?,
                    face_slab(DISPLACEMENT_SLAB_THICKNESS, outer)?,
                )?);
            }
        }
        RectangularKind::Floor => {
            let slab = || {
                boxed(
                    DVec3::new(-tile.x / 2.0, -tile.y / 2.0, base_z),
                    DVec3::new(tile.x, tile.y, upper),
                )
            };
            pieces.extend(slab_pair(tile_name, None, slab()?, slab()?)?);
        }
    }
    Ok(pieces)
}
