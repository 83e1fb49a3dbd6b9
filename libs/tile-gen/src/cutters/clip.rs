//! Clip cutter arrays along base edges.

use config::constants::{
    CLIP_CLEARANCE_ACUTE, CLIP_CLEARANCE_OBTUSE, CLIP_CUTTER_LENGTH, CLIP_INSET, CLIP_PITCH,
    MIN_CLIP_EDGE_LENGTH,
};
use glam::{DVec2, DVec3};
use tile_mesh::primitives::CurveType;
use tile_mesh::{Mesh, TriangleDimensions};

use super::place;
use crate::error::TileError;
use crate::properties::{CurvedForm, RectangularKind, TileProperties, TileShape};
use crate::tiles::corner::CornerFrame;

/// A straight base edge walked with the base on its left.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClipEdge {
    pub name: String,
    pub start: DVec3,
    pub end: DVec3,
    /// Interior corner angle at the start, degrees.
    pub start_angle: f64,
    /// Interior corner angle at the end, degrees.
    pub end_angle: f64,
}

impl ClipEdge {
    fn new(name: impl Into<String>, start: DVec3, end: DVec3, start_angle: f64, end_angle: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            start_angle,
            end_angle,
        }
    }

    fn length(&self) -> f64 {
        self.start.truncate().distance(self.end.truncate())
    }
}

/// Length kept clear at an edge end.
pub(crate) fn clearance(angle: f64) -> f64 {
    if angle >= 90.0 {
        CLIP_CLEARANCE_OBTUSE
    } else {
        CLIP_CLEARANCE_ACUTE
    }
}

/// Copies of `prototype` repeated along an edge, at height `z`.
///
/// Returns `None` when the edge leaves no room for a single unit between
/// its end clearances.
///
/// # Errors
///
/// [`TileError::InsufficientEdgeLength`] for edges shorter than
/// [`MIN_CLIP_EDGE_LENGTH`].
pub(crate) fn clip_array(edge: &ClipEdge, prototype: &Mesh, z: f64) -> Result<Option<Mesh>, TileError> {
    let length = edge.length();
    if length < MIN_CLIP_EDGE_LENGTH {
        return Err(TileError::insufficient_edge(
            edge.name.as_str(),
            length,
            MIN_CLIP_EDGE_LENGTH,
        ));
    }

    let lead = clearance(edge.start_angle);
    let fit = length - lead - clearance(edge.end_angle);
    if fit < CLIP_CUTTER_LENGTH {
        return Ok(None);
    }
    let count = ((fit - CLIP_CUTTER_LENGTH) / CLIP_PITCH).floor() as usize + 1;

    let along = (edge.end - edge.start).truncate().normalize().extend(0.0);
    let inward = DVec3::new(-along.y, along.x, 0.0);
    let start = DVec3::new(edge.start.x, edge.start.y, z);

    let mut array = Mesh::with_capacity(
        prototype.vertex_count() * count,
        prototype.face_count() * count,
    );
    for i in 0..count {
        let offset = lead + i as f64 * CLIP_PITCH;
        let origin = start + along * offset + inward * CLIP_INSET;
        array.merge(&place(prototype, along, origin));
    }
    Ok(Some(array))
}

/// Straight base edges that carry clips, for an OpenLOCK tile.
pub(crate) fn clip_edges(
    props: &TileProperties,
    dimensions: Option<&TriangleDimensions>,
) -> Result<Vec<ClipEdge>, TileError> {
    let shape = props.shape.name();
    let edges = match &props.shape {
        TileShape::Rectangular(p) => {
            let (x, y) = (p.base_size.x / 2.0, p.base_size.y / 2.0);
            let corners = [
                DVec3::new(-x, -y, 0.0),
                DVec3::new(x, -y, 0.0),
                DVec3::new(x, y, 0.0),
                DVec3::new(-x, y, 0.0),
            ];
            let names = ["y_neg", "x_pos", "y_pos", "x_neg"];
            let sides = match p.kind {
                // only the front face of a wall base is reachable
                RectangularKind::Wall => 1,
                RectangularKind::Floor => 4,
            };
            (0..sides)
                .map(|i| ClipEdge::new(names[i], corners[i], corners[(i + 1) % 4], 90.0, 90.0))
                .collect()
        }
        TileShape::Curved(p) => match p.form {
            CurvedForm::Wall { .. } => Vec::new(),
            CurvedForm::Floor { angle, curve_type } => {
                let dims = dimensions.ok_or(TileError::MissingDimensions { shape })?;
                let (a, b, c) = (dims.loc_a, dims.loc_b, dims.loc_c);
                // a concave arc thins the floor toward the leg ends
                let reach = match curve_type {
                    CurveType::Pos => 1.0,
                    CurveType::Neg => 0.5,
                };
                vec![
                    ClipEdge::new("leg_2", a, a + (b - a) * reach, angle, 90.0),
                    ClipEdge::new("leg_1", a + (c - a) * reach, a, 90.0, angle),
                ]
            }
        },
        TileShape::Triangular(_) => {
            let dims = dimensions.ok_or(TileError::MissingDimensions { shape })?;
            dims.edges()
                .iter()
                .map(|e| {
                    ClipEdge::new(
                        format!("side_{}", e.side.name()),
                        e.start,
                        e.end,
                        e.start_angle,
                        e.end_angle,
                    )
                })
                .collect()
        }
        TileShape::Corner(p) => {
            let frame = CornerFrame::new(p.angle);
            vec![
                ClipEdge::new("leg_1", DVec3::ZERO, frame.leg_1 * p.leg_1_len, p.angle, 90.0),
                ClipEdge::new("leg_2", frame.leg_2 * p.leg_2_len, DVec3::ZERO, 90.0, p.angle),
            ]
        }
    };
    Ok(edges)
}

/// A single clip centred on the midpoint of a convex floor arc, opening
/// toward the corner.
pub(crate) fn arc_clip(
    dims: &TriangleDimensions,
    radius: f64,
    angle: f64,
    segments: u32,
    prototype: &Mesh,
    z: f64,
) -> Mesh {
    let a = dims.loc_a.truncate();
    let bisector =
        ((dims.loc_b.truncate() - a).normalize() + (dims.loc_c.truncate() - a).normalize()).normalize();
    // odd chord counts put a chord midpoint, not a vertex, on the bisector
    let chord = (angle / f64::from(segments.max(1))).to_radians();
    let reach = if segments % 2 == 0 {
        radius
    } else {
        radius * (chord / 2.0).cos()
    };
    let inward = -bisector;
    let along = DVec2::new(inward.y, -inward.x);
    let origin = a + bisector * reach + inward * CLIP_INSET - along * (CLIP_CUTTER_LENGTH / 2.0);
    place(prototype, along.extend(0.0), origin.extend(z))
}
