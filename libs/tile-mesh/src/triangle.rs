//! # Triangle Solver
//!
//! Side-angle-side solving for angled and triangular tiles.
//!
//! Side `b` runs from vertex A along the cursor heading to C; side `c` runs
//! from A along the heading turned clockwise by angle A to B. Seen from the
//! cursor's up axis A → B → C is counter-clockwise, so every edge walked in
//! that order has the interior on its left.

use config::constants::{ANGLE_SUM_TOLERANCE, EPSILON};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::turtle::Cursor;

/// Solved sides, angles (degrees) and vertex locations of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleDimensions {
    /// Side opposite A, from B to C.
    pub a: f64,
    /// Side opposite B, from C to A (the first leg).
    pub b: f64,
    /// Side opposite C, from A to B (the second leg).
    pub c: f64,
    /// Angle at A.
    pub angle_a: f64,
    /// Angle at B.
    pub angle_b: f64,
    /// Angle at C.
    pub angle_c: f64,
    /// Location of A.
    pub loc_a: DVec3,
    /// Location of B.
    pub loc_b: DVec3,
    /// Location of C.
    pub loc_c: DVec3,
    /// Extrusion height, once the triangle has been built into a prism.
    pub height: Option<f64>,
}

/// Names a side by the vertex it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleSide {
    /// Side `a`, B → C.
    A,
    /// Side `b`, C → A.
    B,
    /// Side `c`, A → B.
    C,
}

impl TriangleSide {
    /// Lower-case side name.
    pub fn name(self) -> &'static str {
        match self {
            TriangleSide::A => "a",
            TriangleSide::B => "b",
            TriangleSide::C => "c",
        }
    }
}

/// One side walked counter-clockwise, with the interior angles at its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleEdge {
    /// Which side this is.
    pub side: TriangleSide,
    /// Start vertex.
    pub start: DVec3,
    /// End vertex.
    pub end: DVec3,
    /// Side length.
    pub length: f64,
    /// Interior angle at the start vertex, degrees.
    pub start_angle: f64,
    /// Interior angle at the end vertex, degrees.
    pub end_angle: f64,
}

/// Solves a triangle from two legs and their included angle, anchored at the
/// world origin with heading +Y.
///
/// # Example
///
/// ```rust
/// use tile_mesh::triangle::solve_triangle;
///
/// let tri = solve_triangle(3.0, 4.0, 90.0).unwrap();
/// assert!((tri.a - 5.0).abs() < 1e-12);
/// assert!((tri.angle_a + tri.angle_b + tri.angle_c - 180.0).abs() < 1e-6);
/// ```
pub fn solve_triangle(
    leg_1: f64,
    leg_2: f64,
    angle: f64,
) -> Result<TriangleDimensions, MeshError> {
    solve_triangle_at(leg_1, leg_2, angle, &Cursor::default())
}

/// Solves a triangle anchored at a cursor: A at the cursor location, `b`
/// (`leg_1`) along the cursor heading.
///
/// The third side comes from the law of cosines. The remaining angles come
/// from the law of sines, `sin B = b·sin A / a`, paired with the cosine
/// projection `cos B = (c − b·cos A) / a` so that the obtuse root is taken
/// whenever `b² > a² + c²` (and likewise for C).
///
/// # Errors
///
/// [`MeshError::DegenerateTriangle`] if a leg is not positive, the angle is
/// outside (0, 180), or the solved angles do not sum to 180.
pub fn solve_triangle_at(
    leg_1: f64,
    leg_2: f64,
    angle: f64,
    cursor: &Cursor,
) -> Result<TriangleDimensions, MeshError> {
    if !leg_1.is_finite() || !leg_2.is_finite() || leg_1 <= EPSILON || leg_2 <= EPSILON {
        return Err(MeshError::degenerate_triangle(format!(
            "legs must be positive: {leg_1}, {leg_2}"
        )));
    }
    if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
        return Err(MeshError::degenerate_triangle(format!(
            "included angle must lie in (0, 180): {angle}"
        )));
    }

    let (b, c) = (leg_1, leg_2);
    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    let a = (b * b + c * c - 2.0 * b * c * cos_a).sqrt();
    if a.is_nan() || a <= EPSILON {
        return Err(MeshError::degenerate_triangle(format!(
            "third side collapsed: {a}"
        )));
    }

    let angle_b = (b * sin_a).atan2(c - b * cos_a).to_degrees();
    let angle_c = (c * sin_a).atan2(b - c * cos_a).to_degrees();
    if angle_b <= 0.0 || angle_c <= 0.0 {
        return Err(MeshError::degenerate_triangle(format!(
            "solved angles must be positive: B = {angle_b}, C = {angle_c}"
        )));
    }
    let sum = angle + angle_b + angle_c;
    if (sum - 180.0).abs() > ANGLE_SUM_TOLERANCE {
        return Err(MeshError::degenerate_triangle(format!(
            "angles sum to {sum}, not 180"
        )));
    }

    let forward = cursor.forward();
    let turn = DQuat::from_axis_angle(cursor.up(), -angle.to_radians());
    let loc_a = cursor.location;

    Ok(TriangleDimensions {
        a,
        b,
        c,
        angle_a: angle,
        angle_b,
        angle_c,
        loc_a,
        loc_b: loc_a + turn * forward * c,
        loc_c: loc_a + forward * b,
        height: None,
    })
}

impl TriangleDimensions {
    /// Returns a copy carrying an extrusion height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// The three sides walked counter-clockwise: `c`, `a`, `b`.
    pub fn edges(&self) -> [TriangleEdge; 3] {
        [
            self.edge(TriangleSide::C),
            self.edge(TriangleSide::A),
            self.edge(TriangleSide::B),
        ]
    }

    /// One side walked counter-clockwise.
    pub fn edge(&self, side: TriangleSide) -> TriangleEdge {
        let (start, end, length, start_angle, end_angle) = match side {
            TriangleSide::C => (self.loc_a, self.loc_b, self.c, self.angle_a, self.angle_b),
            TriangleSide::A => (self.loc_b, self.loc_c, self.a, self.angle_b, self.angle_c),
            TriangleSide::B => (self.loc_c, self.loc_a, self.b, self.angle_c, self.angle_a),
        };
        TriangleEdge {
            side,
            start,
            end,
            length,
            start_angle,
            end_angle,
        }
    }

    /// Vertices `[A, B, C]` of the triangle grown outward by `distance`,
    /// with every side moved parallel to itself.
    pub fn offset(&self, distance: f64) -> [DVec3; 3] {
        let grow = |vertex: DVec3, p: DVec3, q: DVec3, angle: f64| {
            let inward = ((p - vertex).normalize() + (q - vertex).normalize()).normalize();
            vertex - inward * (distance / (angle.to_radians() / 2.0).sin())
        };
        [
            grow(self.loc_a, self.loc_b, self.loc_c, self.angle_a),
            grow(self.loc_b, self.loc_c, self.loc_a, self.angle_b),
            grow(self.loc_c, self.loc_a, self.loc_b, self.angle_c),
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================
