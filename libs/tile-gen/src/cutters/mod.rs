//! # Clip and Slot Cutters
//!
//! Negatives of the OpenLOCK interlock, placed on tiles built with the
//! [`Blueprint::OpenLock`] base:
//!
//! - clip cutter arrays along every qualifying straight base edge, plus one
//!   on the arc of convex curved floors,
//! - the slot running along a straight wall base,
//! - clip sockets in both ends of straight wall cores.
//!
//! Edges shorter than [`MIN_CLIP_EDGE_LENGTH`] are logged and skipped;
//! the rest of the tile is unaffected.

mod clip;
mod prototypes;
mod side;
mod slot;

pub use prototypes::{PrototypeLibrary, ProceduralPrototypes};

use config::constants::{MIN_CLIP_EDGE_LENGTH, MIN_CURVED_CLIP_RADIUS, WALL_SIDE_CUTTER_MIN_HEIGHT};
use glam::{DMat4, DVec3, DVec4};
use tile_mesh::primitives::CurveType;
use tile_mesh::{Mesh, TriangleDimensions};
use tracing::debug;

use crate::error::TileError;
use crate::piece::{subtractor_name, GeometryRole, TilePiece};
use crate::properties::{Blueprint, CurvedForm, RectangularKind, TileProperties, TileShape};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Generates clip cutter arrays for an OpenLOCK base.
///
/// Each edge with room for at least one unit yields one cutter piece
/// parented to `base`. Tiles on other blueprints get no clips.
///
/// # Errors
///
/// [`TileError::MissingDimensions`] for triangular and curved floor tiles
/// without dimensions, or any error from the prototype library.
pub fn generate_clip_cutters(
    base: &TilePiece,
    dimensions: Option<&TriangleDimensions>,
    props: &TileProperties,
    library: &dyn PrototypeLibrary,
) -> Result<Vec<TilePiece>, TileError> {
    let props = props.resolved();
    if props.blueprint != Blueprint::OpenLock {
        return Ok(Vec::new());
    }
    let edges = clip::clip_edges(&props, dimensions)?;
    if edges.is_empty() {
        return Ok(Vec::new());
    }

    let prototype = library.clip_cutter()?;
    let z = base.mesh.bounding_box().0.z;
    let mut arrays = Vec::with_capacity(edges.len() + 1);
    for edge in &edges {
        match clip::clip_array(edge, &prototype, z) {
            Ok(Some(mesh)) => arrays.push((format!("clip_{}", edge.name), mesh)),
            Ok(None) => debug!(edge = %edge.name, "no room for a clip between edge clearances"),
            Err(err @ TileError::InsufficientEdgeLength { .. }) => {
                debug!(%err, "skipped clip edge");
            }
            Err(err) => return Err(err),
        }
    }

    if let TileShape::Curved(p) = &props.shape {
        if let CurvedForm::Floor {
            angle,
            curve_type: CurveType::Pos,
        } = p.form
        {
            let dims = dimensions.ok_or(TileError::MissingDimensions {
                shape: props.shape.name(),
            })?;
            if p.radius >= MIN_CURVED_CLIP_RADIUS {
                let mesh = clip::arc_clip(dims, p.radius, angle, p.segments, &prototype, z);
                arrays.push(("clip_arc".to_string(), mesh));
            }
        }
    }

    let pieces = cutter_pieces(&props.tile_name, &base.name, arrays);
    debug!(
        tile = %props.tile_name,
        edges = edges.len(),
        cutters = pieces.len(),
        min_edge = MIN_CLIP_EDGE_LENGTH,
        "generated clip cutters"
    );
    Ok(pieces)
}

/// Generates the slot cutter of an OpenLOCK straight wall base.
///
/// Returns `None` for other tiles and for bases too short to hold a slot.
pub fn generate_slot_cutter(
    base: &TilePiece,
    props: &TileProperties,
) -> Result<Option<TilePiece>, TileError> {
    let props = props.resolved();
    let TileShape::Rectangular(p) = &props.shape else {
        return Ok(None);
    };
    if props.blueprint != Blueprint::OpenLock || p.kind != RectangularKind::Wall {
        return Ok(None);
    }
    let z = base.mesh.bounding_box().0.z;
    let Some(mesh) = slot::slot_mesh(p.base_size.x, z)? else {
        debug!(tile = %props.tile_name, base_x = p.base_size.x, "base too short for a slot");
        return Ok(None);
    };
    Ok(cutter_pieces(&props.tile_name, &base.name, [("slot".to_string(), mesh)])
        .into_iter()
        .next())
}

/// Generates clip sockets for both ends of an OpenLOCK straight wall core.
///
/// Cores lower than [`WALL_SIDE_CUTTER_MIN_HEIGHT`] get none.
pub fn generate_wall_side_cutters(
    core: &TilePiece,
    props: &TileProperties,
    library: &dyn PrototypeLibrary,
) -> Result<Vec<TilePiece>, TileError> {
    let props = props.resolved();
    let TileShape::Rectangular(p) = &props.shape else {
        return Ok(Vec::new());
    };
    if props.blueprint != Blueprint::OpenLock || p.kind != RectangularKind::Wall {
        return Ok(Vec::new());
    }
    let (min, max) = core.mesh.bounding_box();
    if max.z - min.z < WALL_SIDE_CUTTER_MIN_HEIGHT {
        return Ok(Vec::new());
    }
    let heights = side::side_heights(max.z);
    if heights.is_empty() {
        return Ok(Vec::new());
    }

    let prototype = library.wall_side_cutter()?;
    let columns = [
        ("side_x_neg".to_string(), side::side_column(&prototype, min.x, 1.0, &heights)),
        ("side_x_pos".to_string(), side::side_column(&prototype, max.x, -1.0, &heights)),
    ];
    let pieces = cutter_pieces(&props.tile_name, &core.name, columns);
    debug!(
        tile = %props.tile_name,
        per_end = heights.len(),
        "generated wall side cutters"
    );
    Ok(pieces)
}

// =============================================================================
// HELPERS
// =============================================================================

/// Copy of `prototype` with its local X laid along `along`, local Y to the
/// left of it and its local origin at `origin`.
pub(crate) fn place(prototype: &Mesh, along: DVec3, origin: DVec3) -> Mesh {
    let across = DVec3::new(-along.y, along.x, 0.0);
    let matrix = DMat4::from_cols(
        along.extend(0.0),
        across.extend(0.0),
        DVec4::Z,
        origin.extend(1.0),
    );
    let mut mesh = prototype.clone();
    mesh.transform(&matrix);
    mesh
}

fn cutter_pieces(
    tile_name: &str,
    owner: &str,
    meshes: impl IntoIterator<Item = (String, Mesh)>,
) -> Vec<TilePiece> {
    meshes
        .into_iter()
        .map(|(face, mesh)| {
            TilePiece::new(
                subtractor_name("cutter", &face, tile_name),
                GeometryRole::Cutter,
                mesh,
            )
            .with_parent(owner)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_place_keeps_orientation() {
        let prototype = crate::tiles::boxed(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0)).unwrap();
        let placed = place(&prototype, DVec3::Y, DVec3::new(5.0, 0.0, 1.0));
        assert_relative_eq!(placed.volume(), 6.0, epsilon = 1e-9);
        let (min, max) = placed.bounding_box();
        // local Y now points along -X
        assert_relative_eq!(min.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(min.z, 1.0, epsilon = 1e-12);
    }
}
