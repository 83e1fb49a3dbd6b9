//! Arc, bridge and path-closing operations.

use config::constants::{approx_zero, EPSILON};
use glam::{DQuat, DVec3};

use super::Turtle;
use crate::error::MeshError;

impl Turtle<'_> {
    /// Draws an open arc of `segments` chords centred on the cursor.
    ///
    /// The arc starts on the cursor's forward axis at `radius` and sweeps
    /// `degrees` clockwise about the cursor's up axis (negative sweeps run
    /// counter-clockwise). Vertex `i` sits at exactly
    /// `degrees * i / segments`, so the endpoints land on the nominal start
    /// and end angles, and sweeps beyond a full turn wrap around. The cursor
    /// does not move; the arc vertices become the selection.
    ///
    /// # Errors
    ///
    /// [`MeshError::DegenerateGeometry`] for a non-positive radius, zero
    /// segments, or a zero sweep.
    pub fn arc(&mut self, radius: f64, degrees: f64, segments: u32) -> Result<Vec<u32>, MeshError> {
        if radius <= EPSILON || !radius.is_finite() {
            return Err(MeshError::degenerate(format!(
                "arc radius must be positive: {radius}"
            )));
        }
        if segments == 0 {
            return Err(MeshError::degenerate("arc needs at least one segment"));
        }
        if approx_zero(degrees) || !degrees.is_finite() {
            return Err(MeshError::degenerate(format!(
                "arc sweep must be non-zero: {degrees}"
            )));
        }

        let center = self.cursor.location;
        let start = self.cursor.forward() * radius;
        let axis = self.cursor.up();
        let sweep = -degrees.to_radians();

        let mut vertices = Vec::with_capacity(segments as usize + 1);
        for i in 0..=segments {
            let angle = sweep * f64::from(i) / f64::from(segments);
            let v = self
                .mesh
                .add_vertex(center + DQuat::from_axis_angle(axis, angle) * start);
            if let Some(&prev) = vertices.last() {
                self.mesh.add_edge(prev, v);
            }
            vertices.push(v);
        }

        self.selection = vertices.clone();
        self.path.clear();
        Ok(vertices)
    }

    /// Joins two open vertex chains of equal length with a strip of quads.
    ///
    /// Both chains become the selection.
    pub fn bridge(&mut self, a: &[u32], b: &[u32]) -> Result<(), MeshError> {
        if a.len() != b.len() || a.len() < 2 {
            return Err(MeshError::invalid_topology(format!(
                "cannot bridge chains of {} and {} vertices",
                a.len(),
                b.len()
            )));
        }
        let count = self.mesh.vertex_count() as u32;
        if let Some(bad) = a.iter().chain(b).find(|&&v| v >= count) {
            return Err(MeshError::invalid_topology(format!(
                "cannot bridge missing vertex {bad}"
            )));
        }

        for i in 0..a.len() - 1 {
            self.mesh.add_face(&[a[i], a[i + 1], b[i + 1], b[i]]);
        }

        let mut selection = a.to_vec();
        selection.extend_from_slice(b);
        self.select(&selection)
    }

    /// Draws the closing edge from the last path vertex back to the first
    /// and moves the cursor onto the first vertex.
    pub fn close(&mut self) -> Result<(), MeshError> {
        let (first, last) = self.path_ends()?;
        self.mesh.add_edge(last, first);
        self.cursor.location = self.mesh.vertex(first);
        self.selection = vec![first];
        Ok(())
    }

    /// Fills the drawn path with a single face and selects its vertices.
    pub fn fill(&mut self) -> Result<usize, MeshError> {
        self.path_ends()?;
        let face = self.path.clone();
        let index = self.mesh.add_face(&face);
        self.selection = face;
        Ok(index)
    }

    /// Fills an explicit vertex loop with a single face and selects it.
    ///
    /// The loop should be star-shaped about its first vertex.
    pub fn fill_loop(&mut self, vertices: &[u32]) -> Result<usize, MeshError> {
        if vertices.len() < 3 {
            return Err(MeshError::invalid_topology(format!(
                "a face needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        self.select(vertices)?;
        let face = self.selection.clone();
        Ok(self.mesh.add_face(&face))
    }

    /// Turns about the cursor's up axis until forward points along
    /// `direction` projected onto the cursor's ground plane.
    pub fn face_towards(&mut self, direction: DVec3) {
        let forward = self.cursor.forward();
        let up = self.cursor.up();
        let flat = direction - up * direction.dot(up);
        if flat.length() < EPSILON {
            return;
        }
        let degrees = up.dot(forward.cross(flat)).atan2(forward.dot(flat)).to_degrees();
        self.lt(degrees);
    }

    fn path_ends(&self) -> Result<(u32, u32), MeshError> {
        match (self.path.first(), self.path.last()) {
            (Some(&first), Some(&last)) if self.path.len() >= 3 => Ok((first, last)),
            _ => Err(MeshError::invalid_topology(format!(
                "path of {} vertices cannot be closed",
                self.path.len()
            ))),
        }
    }
}
