//! # Printed Pieces
//!
//! Bases, cores and textured slabs for every tile topology. Each builder
//! takes properties already passed through
//! [`TileProperties::resolved`](crate::properties::TileProperties::resolved).
//!
//! | Topology | Pieces |
//! |----------|--------|
//! | Straight / curved / corner wall | base, core, outer and inner slab pairs |
//! | Rectangular / triangular / curved floor | base, one slab pair on top |
//!
//! Tiles without a base start their core or slab at `z = 0`.

pub(crate) mod corner;
pub(crate) mod curved;
mod rectangular;
mod triangular;

use config::constants::{DISPLACEMENT_SLAB_THICKNESS, DISPLACEMENT_SUBDIVISIONS};
use glam::DVec3;
use tile_mesh::primitives::draw_cuboid;
use tile_mesh::{subdivide, Cursor, Mesh, MeshError, TriangleDimensions};
use tracing::debug;

use crate::error::TileError;
use crate::piece::{link_pair, piece_name, GeometryRole, TilePiece};
use crate::properties::{Blueprint, CurvedForm, RectangularKind, TileProperties, TileShape};

/// Printed pieces of one tile.
#[derive(Debug, Clone)]
pub struct TileBody {
    /// Base, core and slab pieces.
    pub pieces: Vec<TilePiece>,
    /// Solved triangle of triangular and curved floors.
    pub dimensions: Option<TriangleDimensions>,
}

/// Builds the printed pieces of a tile.
pub fn build_body(props: &TileProperties) -> Result<TileBody, TileError> {
    let props = props.resolved();
    let name = props.tile_name.as_str();
    let body = match &props.shape {
        TileShape::Rectangular(p) => TileBody {
            pieces: rectangular::build(name, props.blueprint, p)?,
            dimensions: None,
        },
        TileShape::Curved(p) => match p.form {
            CurvedForm::Wall { degrees_of_arc } => TileBody {
                pieces: curved::build_wall(name, props.blueprint, p, degrees_of_arc)?,
                dimensions: None,
            },
            CurvedForm::Floor { angle, curve_type } => {
                let (pieces, dims) =
                    curved::build_floor(name, props.blueprint, p, angle, curve_type)?;
                TileBody {
                    pieces,
                    dimensions: Some(dims),
                }
            }
        },
        TileShape::Triangular(p) => {
            let (pieces, dims) = triangular::build(name, props.blueprint, p)?;
            TileBody {
                pieces,
                dimensions: Some(dims),
            }
        }
        TileShape::Corner(p) => TileBody {
            pieces: corner::build(name, props.blueprint, p)?,
            dimensions: None,
        },
    };
    debug!(
        tile = name,
        shape = props.shape.name(),
        pieces = body.pieces.len(),
        "built tile body"
    );
    Ok(body)
}

/// Name of the piece trimmers and cutters are parented to: the base, or the
/// core or slab when the tile has no base.
pub fn owner_name(props: &TileProperties) -> String {
    let suffix = if props.blueprint != Blueprint::None {
        "base"
    } else if is_wall(&props.shape) {
        "core"
    } else {
        "slab.preview"
    };
    piece_name(&props.tile_name, suffix)
}

pub(crate) fn is_wall(shape: &TileShape) -> bool {
    match shape {
        TileShape::Rectangular(p) => p.kind == RectangularKind::Wall,
        TileShape::Curved(p) => matches!(p.form, CurvedForm::Wall { .. }),
        TileShape::Corner(_) => true,
        TileShape::Triangular(_) => false,
    }
}

// =============================================================================
// SHARED BUILDERS
// =============================================================================

/// Axis-aligned box with its minimum corner at `corner`.
pub(crate) fn boxed(corner: DVec3, size: DVec3) -> Result<Mesh, MeshError> {
    draw_cuboid(&mut Cursor::at(corner), size)
}

/// Thickness of the preview slab covering one wall face: the base overhang,
/// never thinner than the displacement slab.
pub(crate) fn preview_thickness(base_y: f64, core_y: f64) -> f64 {
    ((base_y - core_y) / 2.0).max(DISPLACEMENT_SLAB_THICKNESS)
}

/// Wraps a preview and displacement mesh into a linked pair of pieces.
///
/// The displacement mesh is refined by [`DISPLACEMENT_SUBDIVISIONS`] passes
/// so surface relief has vertices to move. `side` distinguishes the two
/// faces of a wall.
pub(crate) fn slab_pair(
    tile_name: &str,
    side: Option<&str>,
    preview: Mesh,
    displacement: Mesh,
) -> Result<[TilePiece; 2], MeshError> {
    let displacement = subdivide(&displacement, DISPLACEMENT_SUBDIVISIONS)?;
    let suffix = |role: &str| match side {
        Some(side) => format!("slab.{role}.{side}"),
        None => format!("slab.{role}"),
    };
    let mut preview = TilePiece::new(
        piece_name(tile_name, &suffix("preview")),
        GeometryRole::Preview,
        preview,
    );
    let mut displacement = TilePiece::new(
        piece_name(tile_name, &suffix("displacement")),
        GeometryRole::Displacement,
        displacement,
    );
    link_pair(&mut preview, &mut displacement);
    Ok([preview, displacement])
}

/// Base piece, unless the tile has none.
pub(crate) fn base_piece(tile_name: &str, mesh: Mesh) -> TilePiece {
    TilePiece::new(piece_name(tile_name, "base"), GeometryRole::Base, mesh)
}

/// Core piece of a wall.
pub(crate) fn core_piece(tile_name: &str, mesh: Mesh) -> TilePiece {
    TilePiece::new(piece_name(tile_name, "core"), GeometryRole::Core, mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{CornerTileProps, RectangularTileProps};
    use approx::assert_relative_eq;

    fn props(blueprint: Blueprint, shape: TileShape) -> TileProperties {
        TileProperties {
            tile_name: "t".into(),
            buffer: 0.001,
            blueprint,
            shape,
        }
    }

    #[test]
    fn test_owner_name() {
        let floor = TileShape::Rectangular(RectangularTileProps {
            tile_size: DVec3::new(2.0, 2.0, 0.3),
            base_size: DVec3::new(2.0, 2.0, 0.2),
            kind: RectangularKind::Floor,
        });
        let corner = TileShape::Corner(CornerTileProps {
            leg_1_len: 2.0,
            leg_2_len: 2.0,
            angle: 90.0,
            base_size: DVec3::new(0.0, 0.5, 0.25),
            tile_size: DVec3::new(0.0, 0.3, 2.0),
        });
        assert_eq!(owner_name(&props(Blueprint::Plain, floor.clone())), "t.base");
        assert_eq!(owner_name(&props(Blueprint::None, floor)), "t.slab.preview");
        assert_eq!(owner_name(&props(Blueprint::None, corner)), "t.core");
    }

    #[test]
    fn test_preview_thickness_floor() {
        assert_relative_eq!(preview_thickness(0.5, 0.3), 0.1, epsilon = 1e-12);
        assert_eq!(preview_thickness(0.0, 0.3), DISPLACEMENT_SLAB_THICKNESS);
    }

    #[test]
    fn test_slab_pair_names() {
        let [preview, displacement] = slab_pair("w", Some("outer"), Mesh::new(), Mesh::new()).unwrap();
        assert_eq!(preview.name, "w.slab.preview.outer");
        assert_eq!(displacement.name, "w.slab.displacement.outer");
        assert_eq!(preview.linked.as_deref(), Some("w.slab.displacement.outer"));
    }
}
