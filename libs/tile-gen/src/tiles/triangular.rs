//! Triangular floors with vertex A on the origin and leg 1 along +Y.

use glam::DVec3;
use tile_mesh::primitives::draw_triangular_prism;
use tile_mesh::{Cursor, TriangleDimensions};

use super::{base_piece, slab_pair};
use crate::error::TileError;
use crate::piece::TilePiece;
use crate::properties::{Blueprint, TriangularTileProps};

pub(super) fn build(
    tile_name: &str,
    blueprint: Blueprint,
    props: &TriangularTileProps,
) -> Result<(Vec<TilePiece>, TriangleDimensions), TileError> {
    let base_z = if blueprint != Blueprint::None {
        props.base_height
    } else {
        0.0
    };
    let prism = |z: f64, height: f64| {
        draw_triangular_prism(
            &mut Cursor::at(DVec3::Z * z),
            props.leg_1,
            props.leg_2,
            props.angle,
            height,
        )
    };

    let mut pieces = Vec::with_capacity(3);
    if base_z > 0.0 {
        let (base, _) = prism(0.0, base_z)?;
        pieces.push(base_piece(tile_name, base));
    }
    let upper = props.tile_height - base_z;
    let (preview, dims) = prism(base_z, upper)?;
    let (displacement, _) = prism(base_z, upper)?;
    pieces.extend(slab_pair(tile_name, None, preview, displacement)?);

    let mut dims = dims.with_height(props.tile_height);
    for loc in [&mut dims.loc_a, &mut dims.loc_b, &mut dims.loc_c] {
        loc.z = 0.0;
    }
    Ok((pieces, dims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangular_floor_pieces() {
        let props = TriangularTileProps {
            leg_1: 4.0,
            leg_2: 3.0,
            angle: 90.0,
            base_height: 0.25,
            tile_height: 0.5,
        };
        let (pieces, dims) = build("tri", Blueprint::Plain, &props).unwrap();
        assert_eq!(pieces.len(), 3);
        assert_relative_eq!(pieces[0].mesh.volume(), 6.0 * 0.25, epsilon = 1e-9);
        assert_relative_eq!(dims.a, 5.0, epsilon = 1e-12);
        assert_eq!(dims.height, Some(0.5));
        assert_eq!(dims.loc_a, DVec3::ZERO);
    }

    #[test]
    fn test_triangular_floor_without_base() {
        let props = TriangularTileProps {
            leg_1: 2.0,
            leg_2: 2.0,
            angle: 60.0,
            base_height: 0.0,
            tile_height: 0.3,
        };
        let (pieces, _) = build("tri", Blueprint::None, &props).unwrap();
        assert_eq!(pieces.len(), 2);
        let (min, max) = pieces[0].mesh.bounding_box();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 0.3, epsilon = 1e-12);
    }
}
