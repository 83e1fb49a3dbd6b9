//! Corner walls: one trimmer across the end of each leg, plus top and
//! bottom.

use config::constants::CORNER_LEG_TRIM_NUDGE;
use glam::DVec3;
use tile_mesh::primitives::draw_cuboid;
use tile_mesh::Cursor;

use super::{footprint, z_trimmers, Trim, TrimVolume};
use crate::error::TileError;
use crate::properties::{Blueprint, CornerTileProps};
use crate::tiles::boxed;
use crate::tiles::corner::CornerFrame;

pub(super) fn trimmers(
    trim: Trim,
    blueprint: Blueprint,
    props: &CornerTileProps,
) -> Result<Vec<TrimVolume>, TileError> {
    let frame = CornerFrame::new(props.angle);
    let width = if blueprint == Blueprint::None {
        props.tile_size.y
    } else {
        props.tile_size.y.max(props.base_size.y)
    };
    let height = props.tile_size.z;
    let (pad, depth) = (trim.pad(), trim.depth());
    let across = width + 2.0 * pad;

    // leg 2 runs along +Y
    let leg_2 = boxed(
        DVec3::new(-pad, props.leg_2_len - trim.buffer, -pad),
        DVec3::new(across, depth, height + 2.0 * pad),
    )?;

    // leg 1 in the frame where it runs along +X, nudged into the wall
    let rotation = frame.leg_1_rotation();
    let local = DVec3::new(
        props.leg_1_len - trim.buffer,
        CORNER_LEG_TRIM_NUDGE - pad,
        -pad,
    );
    let leg_1 = draw_cuboid(
        &mut Cursor::new(rotation * local, rotation),
        DVec3::new(depth, across, height + 2.0 * pad),
    )?;

    let outline = frame.outline(props.leg_1_len, props.leg_2_len, 0.0, width)?;
    let (min, max) = footprint(outline);

    let mut volumes = vec![
        TrimVolume::new("leg_1", leg_1),
        TrimVolume::new("leg_2", leg_2),
    ];
    volumes.extend(z_trimmers(trim, min, max, height)?);
    Ok(volumes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn corner(angle: f64) -> CornerTileProps {
        CornerTileProps {
            leg_1_len: 4.0,
            leg_2_len: 3.0,
            angle,
            base_size: DVec3::new(0.0, 0.5, 0.25),
            tile_size: DVec3::new(0.0, 0.3, 2.0),
        }
    }

    #[test]
    fn test_leg_faces_at_length_minus_buffer() {
        let volumes = trimmers(Trim::new(0.01), Blueprint::Plain, &corner(90.0)).unwrap();
        let (min, _) = volumes[1].mesh.bounding_box();
        assert_relative_eq!(min.y, 3.0 - 0.01, epsilon = 1e-12);
        // leg 1 runs along +X at a right angle
        let (min, max) = volumes[0].mesh.bounding_box();
        assert_relative_eq!(min.x, 4.0 - 0.01, epsilon = 1e-9);
        assert_relative_eq!(min.y, CORNER_LEG_TRIM_NUDGE - 0.51, epsilon = 1e-9);
        assert_relative_eq!(max.y - min.y, 0.5 + 1.02, epsilon = 1e-9);
    }

    #[test]
    fn test_leg_1_follows_angle() {
        let props = corner(60.0);
        let frame = CornerFrame::new(60.0);
        let volumes = trimmers(Trim::new(0.0), Blueprint::Plain, &props).unwrap();
        // every vertex of the leg 1 trimmer lies at or past the leg end
        for v in volumes[0].mesh.vertices() {
            assert!(v.dot(frame.leg_1) >= 4.0 - 1e-9);
        }
    }

    #[test]
    fn test_z_trimmers_cover_footprint() {
        let volumes = trimmers(Trim::new(0.0), Blueprint::Plain, &corner(90.0)).unwrap();
        let (min, max) = volumes[2].mesh.bounding_box();
        assert_relative_eq!(min.x, -0.5, epsilon = 1e-12);
        assert_relative_eq!(max.x, 4.5, epsilon = 1e-12);
        assert_relative_eq!(max.y, 3.5, epsilon = 1e-12);
        assert_relative_eq!(min.z, 2.0, epsilon = 1e-12);
    }
}
