//! # Plane for BSP Operations
//!
//! Oriented plane with point classification.

use config::constants::BSP_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Side of a plane a point or polygon lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Positive side.
    Front,
    /// Negative side.
    Back,
    /// Within [`BSP_EPSILON`] of the plane.
    Coplanar,
    /// Vertices on both sides.
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// Plane `normal · p = w` with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub w: f64,
}

impl Plane {
    /// Plane through three points, facing the side from which they wind
    /// counter-clockwise. `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        if normal == DVec3::ZERO {
            return None;
        }
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Reverses the facing.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Positive in front, negative behind.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    pub fn classify_point(&self, point: DVec3) -> Classification {
        let distance = self.signed_distance(point);
        if distance > BSP_EPSILON {
            Classification::Front
        } else if distance < -BSP_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Classifies a polygon from its vertices, returning the overall side
    /// together with each vertex's side.
    pub fn classify_polygon(&self, vertices: &[DVec3]) -> (Classification, Vec<Classification>) {
        let sides: Vec<Classification> = vertices.iter().map(|&v| self.classify_point(v)).collect();
        let has_front = sides.contains(&Classification::Front);
        let has_back = sides.contains(&Classification::Back);
        let overall = match (has_front, has_back) {
            (false, false) => Classification::Coplanar,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (true, true) => Classification::Spanning,
        };
        (overall, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_relative_eq!(plane.normal.z, 1.0);
        assert_relative_eq!(plane.w, 0.0);
    }

    #[test]
    fn test_plane_rejects_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 3.0).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(plane.classify_point(DVec3::Z), Classification::Front);
        assert_eq!(plane.classify_point(-DVec3::Z), Classification::Back);
        assert_eq!(
            plane.classify_point(DVec3::new(4.0, 2.0, BSP_EPSILON * 0.5)),
            Classification::Coplanar
        );
    }

    #[test]
    fn test_plane_classify_polygon() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        let lifted = [DVec3::Z, DVec3::X + DVec3::Z, DVec3::Y + DVec3::Z];
        assert_eq!(plane.classify_polygon(&lifted).0, Classification::Front);

        let resting = [DVec3::ZERO, DVec3::X, DVec3::Y - DVec3::Z];
        let (overall, sides) = plane.classify_polygon(&resting);
        assert_eq!(overall, Classification::Back);
        assert_eq!(sides[0], Classification::Coplanar);

        let crossing = [-DVec3::Z, DVec3::X - DVec3::Z, DVec3::Y + DVec3::Z];
        assert_eq!(plane.classify_polygon(&crossing).0, Classification::Spanning);
        let flat = [DVec3::ZERO, DVec3::X, DVec3::Y];
        assert_eq!(plane.classify_polygon(&flat).0, Classification::Coplanar);
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = Plane::from_points(DVec3::Z, DVec3::Z + DVec3::X, DVec3::Z + DVec3::Y)
            .unwrap();
        plane.flip();
        assert_relative_eq!(plane.normal.z, -1.0);
        assert_relative_eq!(plane.w, -1.0);
    }
}
