//! # Polygon for BSP Operations
//!
//! Convex polygon with its supporting plane and plane splitting.

use glam::DVec3;

use super::plane::{Classification, Plane};

/// A convex polygon wound counter-clockwise about its plane normal.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<DVec3>,
    pub plane: Plane,
}

/// Destination lists for [`Polygon::split`].
#[derive(Debug, Default)]
pub struct SplitResult {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// `None` for fewer than three vertices or a degenerate leading corner.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Sorts this polygon into `out` relative to `plane`, cutting it in two
    /// when it spans the plane.
    pub fn split(self, plane: &Plane, out: &mut SplitResult) {
        let (overall, sides) = plane.classify_polygon(&self.vertices);

        match overall {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            Classification::Front => out.front.push(self),
            Classification::Back => out.back.push(self),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front = Vec::with_capacity(n + 1);
                let mut back = Vec::with_capacity(n + 1);
                for i in 0..n {
                    let j = (i + 1) % n;
                    let (vi, vj) = (self.vertices[i], self.vertices[j]);
                    let (si, sj) = (sides[i], sides[j]);
                    if si != Classification::Back {
                        front.push(vi);
                    }
                    if si != Classification::Front {
                        back.push(vi);
                    }
                    let crosses = matches!(
                        (si, sj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let cut = vi.lerp(vj, di / (di - dj));
                        front.push(cut);
                        back.push(cut);
                    }
                }
                // keep the parent plane; the pieces are coplanar with it
                if front.len() >= 3 {
                    out.front.push(Polygon {
                        vertices: front,
                        plane: self.plane,
                    });
                }
                if back.len() >= 3 {
                    out.back.push(Polygon {
                        vertices: back,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    fn ground() -> Plane {
        Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap()
    }

    #[test]
    fn test_polygon_flip_reverses_winding() {
        let mut poly = triangle_at(0.0);
        poly.flip();
        assert_eq!(poly.vertices[0], DVec3::new(0.0, 1.0, 0.0));
        assert!(poly.plane.normal.z < 0.0);
    }

    #[test]
    fn test_polygon_split_sorts_sides() {
        let mut out = SplitResult::default();
        triangle_at(1.0).split(&ground(), &mut out);
        triangle_at(-1.0).split(&ground(), &mut out);
        triangle_at(0.0).split(&ground(), &mut out);
        let mut flipped = triangle_at(0.0);
        flipped.flip();
        flipped.split(&ground(), &mut out);

        assert_eq!(out.front.len(), 1);
        assert_eq!(out.back.len(), 1);
        assert_eq!(out.coplanar_front.len(), 1);
        assert_eq!(out.coplanar_back.len(), 1);
    }

    #[test]
    fn test_polygon_split_spanning() {
        let poly = Polygon::new(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();
        let mut out = SplitResult::default();
        poly.split(&ground(), &mut out);

        assert_eq!(out.front.len(), 1);
        assert_eq!(out.back.len(), 1);
        assert_eq!(out.front[0].vertices.len(), 3);
        assert_eq!(out.back[0].vertices.len(), 4);
        assert!(out.front[0].vertices.iter().all(|v| v.z >= -1e-12));
    }
}
