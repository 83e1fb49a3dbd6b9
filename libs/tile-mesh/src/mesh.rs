//! # Mesh Data Structure
//!
//! Polygon mesh with explicit edges, as produced by turtle drafting.
//! Faces are vertex loops that are planar and star-shaped about their
//! first vertex, so they can be fanned into triangles from index 0.

use std::collections::{HashMap, VecDeque};

use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use glam::{DMat4, DQuat, DVec3};

use crate::error::MeshError;

/// A polygon mesh with vertices, undirected edges and face loops.
///
/// All geometry calculations use f64.
///
/// # Example
///
/// ```rust
/// use tile_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(&[a, b, c]);
/// assert_eq!(mesh.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Undirected edges, stored with the lower index first
    edges: Vec<[u32; 2]>,
    /// Face loops
    faces: Vec<Vec<u32>>,
    /// Edge deduplication index
    edge_lookup: HashMap<[u32; 2], usize>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(vertex_count + face_count),
            faces: Vec::with_capacity(face_count),
            edge_lookup: HashMap::with_capacity(vertex_count + face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds an undirected edge, returning the index of the new or existing
    /// edge. Self-loops are ignored.
    pub fn add_edge(&mut self, a: u32, b: u32) -> Option<usize> {
        if a == b {
            return None;
        }
        let key = edge_key(a, b);
        if let Some(&index) = self.edge_lookup.get(&key) {
            return Some(index);
        }
        let index = self.edges.len();
        self.edges.push(key);
        self.edge_lookup.insert(key, index);
        Some(index)
    }

    /// Adds a face loop and every edge along its boundary.
    pub fn add_face(&mut self, face: &[u32]) -> usize {
        for (a, b) in loop_pairs(face) {
            self.add_edge(a, b);
        }
        self.faces.push(face.to_vec());
        self.faces.len() - 1
    }

    /// Returns true if an edge joins `a` and `b`.
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.edge_lookup.contains_key(&edge_key(a, b))
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Moves the vertex at the given index.
    #[inline]
    pub fn set_vertex(&mut self, index: u32, position: DVec3) {
        self.vertices[index as usize] = position;
    }

    /// Returns the positions of a face's vertices.
    pub fn face_positions(&self, face: usize) -> Vec<DVec3> {
        self.faces[face].iter().map(|&i| self.vertex(i)).collect()
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    ///
    /// Returns `(ZERO, ZERO)` for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for v in &self.vertices {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Returns the size of the bounding box.
    pub fn dimensions(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        max - min
    }

    /// Translates all vertices.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Transforms all vertices by a matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Rotates all vertices about a pivot point.
    pub fn rotate_about(&mut self, rotation: DQuat, pivot: DVec3) {
        for v in &mut self.vertices {
            *v = pivot + rotation * (*v - pivot);
        }
    }

    /// Applies a function to every vertex position.
    pub fn map_vertices(&mut self, mut f: impl FnMut(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }

    /// Appends another mesh, offsetting its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        for [a, b] in &other.edges {
            self.add_edge(a + offset, b + offset);
        }
        for face in &other.faces {
            let shifted: Vec<u32> = face.iter().map(|i| i + offset).collect();
            self.add_face(&shifted);
        }
    }

    /// Reverses the winding of every face.
    pub fn flip_faces(&mut self) {
        for face in &mut self.faces {
            reverse_loop(face);
        }
    }

    /// Unit normal of a face by Newell's method, zero if degenerate.
    pub fn face_normal(&self, face: usize) -> DVec3 {
        newell_normal(&self.face_positions(face))
    }

    /// Returns true if every vertex of the face lies on its plane.
    pub fn is_face_planar(&self, face: usize) -> bool {
        let positions = self.face_positions(face);
        let normal = newell_normal(&positions);
        if normal == DVec3::ZERO {
            return false;
        }
        let origin = positions[0];
        positions
            .iter()
            .all(|p| (*p - origin).dot(normal).abs() < VERTEX_MERGE_EPSILON)
    }

    /// Fans every face into triangles from its first vertex.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::new();
        for face in &self.faces {
            for i in 1..face.len().saturating_sub(1) {
                triangles.push([face[0], face[i], face[i + 1]]);
            }
        }
        triangles
    }

    /// Signed volume enclosed by the faces. Positive when normals point
    /// outward.
    pub fn volume(&self) -> f64 {
        self.signed_volume(0..self.faces.len())
    }

    fn signed_volume(&self, faces: impl IntoIterator<Item = usize>) -> f64 {
        let mut volume = 0.0;
        for f in faces {
            let face = &self.faces[f];
            let v0 = self.vertex(face[0]);
            for i in 1..face.len().saturating_sub(1) {
                let v1 = self.vertex(face[i]);
                let v2 = self.vertex(face[i + 1]);
                volume += v0.dot(v1.cross(v2));
            }
        }
        volume / 6.0
    }

    /// Maps each undirected edge to the faces that use it.
    fn edge_faces(&self) -> HashMap<[u32; 2], Vec<usize>> {
        let mut adjacency: HashMap<[u32; 2], Vec<usize>> = HashMap::new();
        for (f, face) in self.faces.iter().enumerate() {
            for (a, b) in loop_pairs(face) {
                adjacency.entry(edge_key(a, b)).or_default().push(f);
            }
        }
        adjacency
    }

    /// Verifies the mesh is a closed 2-manifold with consistent winding.
    ///
    /// Every face must have at least three valid vertices, every edge must
    /// be shared by exactly two faces, and no directed edge may appear twice.
    pub fn check_manifold(&self) -> Result<(), MeshError> {
        self.check_closed()?;
        self.check_winding()
    }

    fn check_closed(&self) -> Result<(), MeshError> {
        if self.faces.is_empty() {
            return Err(MeshError::non_manifold("mesh has no faces"));
        }
        let count = self.vertices.len() as u32;
        for (f, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::invalid_topology(format!(
                    "face {f} has {} vertices",
                    face.len()
                )));
            }
            if let Some(bad) = face.iter().find(|&&i| i >= count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {f} references missing vertex {bad}"
                )));
            }
        }

        let adjacency = self.edge_faces();
        for (edge, faces) in &adjacency {
            if faces.len() != 2 {
                return Err(MeshError::non_manifold(format!(
                    "edge {edge:?} is shared by {} faces",
                    faces.len()
                )));
            }
        }
        if let Some(edge) = self.edges.iter().find(|e| !adjacency.contains_key(*e)) {
            return Err(MeshError::non_manifold(format!(
                "edge {edge:?} belongs to no face"
            )));
        }
        Ok(())
    }

    fn check_winding(&self) -> Result<(), MeshError> {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for (f, face) in self.faces.iter().enumerate() {
            for (a, b) in loop_pairs(face) {
                if let Some(other) = directed.insert((a, b), f) {
                    return Err(MeshError::non_manifold(format!(
                        "faces {other} and {f} both traverse edge {a}->{b}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Winds every face consistently and outward.
    ///
    /// Faces are oriented by breadth-first walk across shared edges, then
    /// each connected shell is flipped if its signed volume is negative.
    /// The first vertex of every face is preserved.
    ///
    /// # Errors
    ///
    /// [`MeshError::NonManifold`] if the mesh is open, has edges shared by
    /// more than two faces, or is not orientable.
    pub fn recalculate_normals(&mut self) -> Result<(), MeshError> {
        self.check_closed()?;
        let adjacency = self.edge_faces();
        let mut visited = vec![false; self.faces.len()];

        for seed in 0..self.faces.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            let mut shell = vec![seed];
            let mut queue = VecDeque::from([seed]);

            while let Some(f) = queue.pop_front() {
                let pairs: Vec<(u32, u32)> = loop_pairs(&self.faces[f]).collect();
                for (a, b) in pairs {
                    let Some(neighbours) = adjacency.get(&edge_key(a, b)) else {
                        continue;
                    };
                    for &g in neighbours {
                        if g == f || visited[g] {
                            continue;
                        }
                        if loop_pairs(&self.faces[g]).any(|pair| pair == (a, b)) {
                            reverse_loop(&mut self.faces[g]);
                        }
                        visited[g] = true;
                        shell.push(g);
                        queue.push_back(g);
                    }
                }
            }

            if self.signed_volume(shell.iter().copied()) < 0.0 {
                for f in shell {
                    reverse_loop(&mut self.faces[f]);
                }
            }
        }

        self.check_winding()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

#[inline]
fn edge_key(a: u32, b: u32) -> [u32; 2] {
    if a < b {
        [a, b]
    } else {
        [b, a]
    }
}

/// Consecutive index pairs around a closed loop.
fn loop_pairs(face: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[i], face[(i + 1) % n]))
}

/// Reverses a loop while keeping its first vertex in place.
fn reverse_loop(face: &mut [u32]) {
    if face.len() > 1 {
        face[1..].reverse();
    }
}

/// Newell normal of a polygon, normalized, or zero if degenerate.
pub(crate) fn newell_normal(points: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    if normal.length() < EPSILON {
        DVec3::ZERO
    } else {
        normal.normalize()
    }
}

// =============================================================================
// TESTS
// =============================================================================
