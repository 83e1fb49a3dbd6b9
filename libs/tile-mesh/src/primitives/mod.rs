//! # Primitives
//!
//! Solids drafted with the turtle: cuboids, triangular prisms, outline
//! prisms and curved slabs. Every builder has a pure variant anchored at the
//! world origin and a `draw_*` variant anchored at a cursor, and every result
//! passes through [`Mesh::recalculate_normals`](crate::Mesh::recalculate_normals).

pub mod cuboid;
pub mod curved;
pub mod prism;

pub use cuboid::{cuboid, draw_cuboid};
pub use curved::{curved_floor, curved_slab, draw_curved_floor, draw_curved_slab, CurveType};
pub use prism::{draw_triangular_prism, extrude_outline, triangular_prism};

use config::constants::EPSILON;

use crate::error::MeshError;

/// Rejects zero, negative-zero and non-finite extents.
pub(crate) fn require_extent(name: &str, value: f64) -> Result<(), MeshError> {
    if !value.is_finite() || value.abs() <= EPSILON {
        return Err(MeshError::degenerate(format!(
            "{name} must be non-zero: {value}"
        )));
    }
    Ok(())
}
