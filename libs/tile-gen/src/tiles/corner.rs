//! Corner walls.
//!
//! Leg 2 runs along +Y from the origin; leg 1 runs along +Y turned clockwise
//! by the included angle. Leg lengths are measured along the outer faces,
//! which meet at the origin. Wall depth grows into the corner.

use config::constants::DISPLACEMENT_SLAB_THICKNESS;
use glam::{DQuat, DVec3};
use tile_mesh::primitives::extrude_outline;
use tile_mesh::{Cursor, Mesh};

use super::{base_piece, core_piece, preview_thickness, slab_pair};
use crate::error::TileError;
use crate::piece::TilePiece;
use crate::properties::{Blueprint, CornerTileProps};

/// Directions spanning a corner wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CornerFrame {
    /// Along leg 1, away from the corner.
    pub leg_1: DVec3,
    /// Along leg 2, away from the corner.
    pub leg_2: DVec3,
    /// Across leg 1, into the wall.
    pub across_1: DVec3,
    /// Across leg 2, into the wall.
    pub across_2: DVec3,
    /// Into the corner between the legs.
    pub bisector: DVec3,
    /// Included angle in degrees.
    pub angle: f64,
}

impl CornerFrame {
    pub fn new(angle: f64) -> Self {
        let leg_2 = DVec3::Y;
        let leg_1 = DQuat::from_rotation_z(-angle.to_radians()) * leg_2;
        Self {
            leg_1,
            leg_2,
            across_1: DVec3::new(-leg_1.y, leg_1.x, 0.0),
            across_2: DVec3::new(leg_2.y, -leg_2.x, 0.0),
            bisector: (leg_1 + leg_2).normalize(),
            angle,
        }
    }

    /// Rotation taking +X onto leg 1 and +Y across it.
    pub fn leg_1_rotation(&self) -> DQuat {
        DQuat::from_rotation_z(-(self.angle - 90.0).to_radians())
    }

    /// Where the lines `inset` inside both outer faces meet.
    pub fn inner_corner(&self, inset: f64) -> DVec3 {
        self.bisector * (inset / (self.angle / 2.0).to_radians().sin())
    }

    /// Closed L-shaped outline of the band between `inset` and
    /// `inset + width` inside the outer faces, counter-clockwise and
    /// star-shaped about its first point.
    ///
    /// # Errors
    ///
    /// [`TileError::InvalidProperties`] if a leg is too short to clear the
    /// inner corner.
    pub fn outline(
        &self,
        leg_1_len: f64,
        leg_2_len: f64,
        inset: f64,
        width: f64,
    ) -> Result<[DVec3; 6], TileError> {
        let far = inset + width;
        let reach = far / (self.angle / 2.0).to_radians().tan();
        if leg_1_len <= reach || leg_2_len <= reach {
            return Err(TileError::invalid(format!(
                "corner legs {leg_1_len} and {leg_2_len} must be longer than {reach:.3}"
            )));
        }
        Ok([
            self.inner_corner(inset),
            self.leg_1 * leg_1_len + self.across_1 * inset,
            self.leg_1 * leg_1_len + self.across_1 * far,
            self.inner_corner(far),
            self.leg_2 * leg_2_len + self.across_2 * far,
            self.leg_2 * leg_2_len + self.across_2 * inset,
        ])
    }

    /// Prism over [`CornerFrame::outline`] from `z` up by `height`.
    pub fn band(
        &self,
        props: &CornerTileProps,
        inset: f64,
        width: f64,
        z: f64,
        height: f64,
    ) -> Result<Mesh, TileError> {
        let outline = self
            .outline(props.leg_1_len, props.leg_2_len, inset, width)?
            .map(|p| p + DVec3::Z * z);
        Ok(extrude_outline(&mut Cursor::default(), &outline, height)?)
    }
}

pub(super) fn build(
    tile_name: &str,
    blueprint: Blueprint,
    props: &CornerTileProps,
) -> Result<Vec<TilePiece>, TileError> {
    let frame = CornerFrame::new(props.angle);
    let has_base = blueprint != Blueprint::None;
    let base_y = if has_base { props.base_size.y } else { 0.0 };
    let base_z = if has_base { props.base_size.z } else { 0.0 };
    let core_y = props.tile_size.y;
    let upper = props.tile_size.z - base_z;
    let core_inset = ((base_y - core_y) / 2.0).max(0.0);

    let mut pieces = Vec::with_capacity(6);
    if has_base {
        let base = frame.band(props, 0.0, base_y, 0.0, base_z)?;
        pieces.push(base_piece(tile_name, base));
    }
    let core = frame.band(props, core_inset, core_y, base_z, upper)?;
    pieces.push(core_piece(tile_name, core));

    let t = preview_thickness(base_y, core_y);
    let outer = |thickness: f64| frame.band(props, core_inset - thickness, thickness, base_z, upper);
    let inner = |thickness: f64| frame.band(props, core_inset + core_y, thickness, base_z, upper);
    pieces.extend(slab_pair(
        tile_name,
        Some("outer"),
        outer(t)?,
        outer(DISPLACEMENT_SLAB_THICKNESS)?,
    )?);
    pieces.extend(slab_pair(
        tile_name,
        Some("inner"),
        inner(t)?,
        inner(DISPLACEMENT_SLAB_THICKNESS)?,
    )?);
    Ok(pieces)
}
