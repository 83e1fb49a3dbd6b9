//! # Turtle Drafting
//!
//! Cursor-driven mesh construction. A [`Turtle`] borrows a [`Cursor`]
//! exclusively for the length of one drafting session, moves it around while
//! extruding the active selection, and puts the cursor back exactly where it
//! found it when the session ends, whether the session finished or bailed out
//! early through `?`.
//!
//! ## Conventions
//!
//! Movement is in the cursor's local frame:
//!
//! | Move | Local axis |
//! |------|------------|
//! | `fd` / `bk` | ±Y |
//! | `ri` / `lf` | ±X |
//! | `up` / `dn` | ±Z |
//!
//! With the pen down a move extrudes the selection: a vertex becomes an
//! edge, an edge becomes a quad, a face becomes a prism. With the pen up
//! only the cursor moves.
//!
//! ## Example
//!
//! ```rust
//! use tile_mesh::turtle::{Cursor, Turtle};
//!
//! let mut cursor = Cursor::default();
//! let before = cursor;
//! let mesh = Turtle::draft(&mut cursor, |t| {
//!     t.add_vert();
//!     t.pen_down();
//!     t.ri(2.0)?;
//!     t.select_all();
//!     t.fd(3.0)
//! })
//! .unwrap();
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(cursor, before);
//! ```

mod draw;


use std::collections::{HashMap, HashSet};

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;

// =============================================================================
// CURSOR
// =============================================================================

/// Location and orientation of the drafting cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    /// World-space location.
    pub location: DVec3,
    /// Orientation of the local frame.
    pub rotation: DQuat,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            location: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Cursor {
    /// Creates a cursor from a location and orientation.
    pub fn new(location: DVec3, rotation: DQuat) -> Self {
        Self { location, rotation }
    }

    /// Creates an unrotated cursor at a location.
    pub fn at(location: DVec3) -> Self {
        Self {
            location,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Creates a level cursor whose forward axis points along `direction`
    /// projected onto the XY plane.
    pub fn facing(location: DVec3, direction: DVec3) -> Self {
        let yaw = (-direction.x).atan2(direction.y);
        Self {
            location,
            rotation: DQuat::from_rotation_z(yaw),
        }
    }

    /// Local +Y in world space.
    #[inline]
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Local +X in world space.
    #[inline]
    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    /// Local +Z in world space.
    #[inline]
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    /// Heading in degrees, clockwise from +Y when seen from above.
    pub fn heading(&self) -> f64 {
        let f = self.forward();
        f.x.atan2(f.y).to_degrees()
    }

    /// Maps a point from the cursor's local frame to world space.
    #[inline]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.location + self.rotation * local
    }
}

/// Local move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Local +Y.
    Forward,
    /// Local -Y.
    Back,
    /// Local -X.
    Left,
    /// Local +X.
    Right,
    /// Local +Z.
    Up,
    /// Local -Z.
    Down,
}

impl Direction {
    /// Unit vector of this direction in the cursor's local frame.
    pub fn local(self) -> DVec3 {
        match self {
            Direction::Forward => DVec3::Y,
            Direction::Back => DVec3::NEG_Y,
            Direction::Left => DVec3::NEG_X,
            Direction::Right => DVec3::X,
            Direction::Up => DVec3::Z,
            Direction::Down => DVec3::NEG_Z,
        }
    }
}

/// Local rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Local X (pitch).
    X,
    /// Local Y (roll).
    Y,
    /// Local Z (heading).
    Z,
}

impl Axis {
    fn local(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

/// Whether moves extrude geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pen {
    /// Moves only relocate the cursor.
    #[default]
    Up,
    /// Moves extrude the selection.
    Down,
}

/// Snapshot of a drafting session.
#[derive(Debug, Clone, PartialEq)]
pub struct TurtleState {
    /// Cursor transform.
    pub cursor: Cursor,
    /// Pen state.
    pub pen: Pen,
    /// Selected vertex indices.
    pub selection: Vec<u32>,
}

// =============================================================================
// TURTLE
// =============================================================================

/// A drafting session holding a cursor and the mesh being drawn.
///
/// The cursor transform captured by [`Turtle::begin`] is written back when
/// the session is dropped.
#[derive(Debug)]
pub struct Turtle<'c> {
    cursor: &'c mut Cursor,
    saved: Cursor,
    pen: Pen,
    selection: Vec<u32>,
    path: Vec<u32>,
    mesh: Mesh,
}

impl Drop for Turtle<'_> {
    fn drop(&mut self) {
        *self.cursor = self.saved;
    }
}

impl<'c> Turtle<'c> {
    /// Opens a drafting session on `cursor`, with the pen up and an empty
    /// mesh.
    pub fn begin(cursor: &'c mut Cursor) -> Self {
        let saved = *cursor;
        Self {
            cursor,
            saved,
            pen: Pen::Up,
            selection: Vec::new(),
            path: Vec::new(),
            mesh: Mesh::new(),
        }
    }

    /// Runs `draw` in a fresh session and returns the drafted mesh.
    ///
    /// The cursor is restored on both success and failure.
    pub fn draft<F>(cursor: &mut Cursor, draw: F) -> Result<Mesh, MeshError>
    where
        F: FnOnce(&mut Turtle<'_>) -> Result<(), MeshError>,
    {
        let mut turtle = Turtle::begin(cursor);
        draw(&mut turtle)?;
        Ok(turtle.finish())
    }

    /// Ends the session, restoring the cursor, and returns the mesh.
    pub fn finish(mut self) -> Mesh {
        std::mem::take(&mut self.mesh)
    }

    /// Current cursor transform.
    pub fn cursor(&self) -> &Cursor {
        self.cursor
    }

    /// Mesh drafted so far.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Selected vertex indices.
    pub fn selection(&self) -> &[u32] {
        &self.selection
    }

    /// Returns a snapshot of the session state.
    pub fn state(&self) -> TurtleState {
        TurtleState {
            cursor: *self.cursor,
            pen: self.pen,
            selection: self.selection.clone(),
        }
    }

    /// Lowers the pen.
    pub fn pen_down(&mut self) {
        self.pen = Pen::Down;
    }

    /// Raises the pen.
    pub fn pen_up(&mut self) {
        self.pen = Pen::Up;
    }

    /// Returns the cursor to where the session began.
    pub fn home(&mut self) {
        *self.cursor = self.saved;
    }

    /// Moves the cursor to an absolute location without changing its
    /// orientation or drawing.
    pub fn set_position(&mut self, location: DVec3) {
        self.cursor.location = location;
    }

    /// Replaces the cursor orientation.
    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.cursor.rotation = rotation;
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Adds a vertex at the cursor and makes it the only selected vertex.
    ///
    /// The vertex also starts a new path for [`Turtle::close`] and
    /// [`Turtle::fill`].
    pub fn add_vert(&mut self) -> u32 {
        let v = self.mesh.add_vertex(self.cursor.location);
        self.selection = vec![v];
        self.path = vec![v];
        v
    }

    /// Selects every vertex.
    pub fn select_all(&mut self) {
        self.selection = (0..self.mesh.vertex_count() as u32).collect();
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Replaces the selection with the given vertices.
    pub fn select(&mut self, vertices: &[u32]) -> Result<(), MeshError> {
        let count = self.mesh.vertex_count() as u32;
        if let Some(bad) = vertices.iter().find(|&&v| v >= count) {
            return Err(MeshError::invalid_topology(format!(
                "cannot select missing vertex {bad}"
            )));
        }
        self.selection = dedup(vertices.iter().copied());
        Ok(())
    }

    // =========================================================================
    // MOVEMENT
    // =========================================================================

    /// Moves forward (local +Y).
    pub fn fd(&mut self, distance: f64) -> Result<(), MeshError> {
        self.step(Direction::Forward, distance)
    }

    /// Moves back (local -Y).
    pub fn bk(&mut self, distance: f64) -> Result<(), MeshError> {
        self.step(Direction::Back, distance)
    }

    /// Moves left (local -X).
    pub fn lf(&mut self, distance: f64) -> Result<(), MeshError> {
        self.step(Direction::Left, distance)
    }

    /// Moves right (local +X).
    pub fn ri(&mut self, distance: f64) -> Result<(), MeshError> {
        self.step(Direction::Right, distance)
    }

    /// Moves up (local +Z).
    pub fn up(&mut self, distance: f64) -> Result<(), MeshError> {
        self.step(Direction::Up, distance)
    }

    /// Moves down (local -Z).
    pub fn dn(&mut self, distance: f64) -> Result<(), MeshError> {
        self.step(Direction::Down, distance)
    }

    /// Moves `distance` along a local direction, extruding with the pen down.
    ///
    /// # Errors
    ///
    /// [`MeshError::NoActiveVertex`] if the pen is down and nothing is
    /// selected.
    pub fn step(&mut self, direction: Direction, distance: f64) -> Result<(), MeshError> {
        let delta = self.cursor.rotation * direction.local() * distance;
        if self.pen == Pen::Down {
            self.extrude(delta, "step")?;
        }
        self.cursor.location += delta;
        Ok(())
    }

    /// Moves to an absolute location, extruding with the pen down.
    pub fn goto(&mut self, target: DVec3) -> Result<(), MeshError> {
        let delta = target - self.cursor.location;
        if self.pen == Pen::Down {
            self.extrude(delta, "goto")?;
        }
        self.cursor.location = target;
        Ok(())
    }

    /// Moves the selection and the cursor together without extruding.
    pub fn shift(&mut self, direction: Direction, distance: f64) -> Result<(), MeshError> {
        if self.selection.is_empty() {
            return Err(MeshError::no_active_vertex("shift"));
        }
        let delta = self.cursor.rotation * direction.local() * distance;
        for &v in &self.selection {
            self.mesh.set_vertex(v, self.mesh.vertex(v) + delta);
        }
        self.cursor.location += delta;
        Ok(())
    }

    // =========================================================================
    // ROTATION
    // =========================================================================

    /// Turns right (clockwise seen from above) by `degrees`.
    pub fn rt(&mut self, degrees: f64) {
        self.turn(Axis::Z, -degrees, None);
    }

    /// Turns left (counter-clockwise seen from above) by `degrees`.
    pub fn lt(&mut self, degrees: f64) {
        self.turn(Axis::Z, degrees, None);
    }

    /// Rotates the cursor counter-clockwise about one of its local axes.
    ///
    /// With `center_override` the cursor location also swings around that
    /// pivot.
    pub fn turn(&mut self, axis: Axis, degrees: f64, center_override: Option<DVec3>) {
        let world_axis = self.cursor.rotation * axis.local();
        let q = DQuat::from_axis_angle(world_axis, degrees.to_radians());
        self.cursor.rotation = (q * self.cursor.rotation).normalize();
        if let Some(pivot) = center_override {
            self.cursor.location = pivot + q * (self.cursor.location - pivot);
        }
    }

    /// Rotates the selected vertices counter-clockwise about a local axis of
    /// the cursor, around `center_override` or the cursor location.
    pub fn rotate_selection(
        &mut self,
        axis: Axis,
        degrees: f64,
        center_override: Option<DVec3>,
    ) -> Result<(), MeshError> {
        if self.selection.is_empty() {
            return Err(MeshError::no_active_vertex("rotate_selection"));
        }
        let world_axis = self.cursor.rotation * axis.local();
        let q = DQuat::from_axis_angle(world_axis, degrees.to_radians());
        let pivot = center_override.unwrap_or(self.cursor.location);
        for &v in &self.selection {
            let p = self.mesh.vertex(v);
            self.mesh.set_vertex(v, pivot + q * (p - pivot));
        }
        Ok(())
    }

    // =========================================================================
    // EXTRUSION
    // =========================================================================

    /// Extrudes the selection by `delta` and selects the new geometry.
    ///
    /// Selected vertices get a translated copy joined by an edge. Selected
    /// edges on the rim of the selected region (zero or one selected face)
    /// grow a side quad. Selected faces are copied, and the originals stay
    /// in place so an open sheet closes into a solid.
    fn extrude(&mut self, delta: DVec3, operation: &'static str) -> Result<(), MeshError> {
        if self.selection.is_empty() {
            return Err(MeshError::no_active_vertex(operation));
        }
        let selected: HashSet<u32> = self.selection.iter().copied().collect();

        let faces: Vec<Vec<u32>> = self
            .mesh
            .faces()
            .iter()
            .filter(|f| f.iter().all(|v| selected.contains(v)))
            .cloned()
            .collect();
        let edges: Vec<[u32; 2]> = self
            .mesh
            .edges()
            .iter()
            .filter(|[a, b]| selected.contains(a) && selected.contains(b))
            .copied()
            .collect();

        let mut face_use: HashMap<[u32; 2], usize> = HashMap::new();
        for face in &faces {
            for i in 0..face.len() {
                let (a, b) = (face[i], face[(i + 1) % face.len()]);
                *face_use.entry([a.min(b), a.max(b)]).or_default() += 1;
            }
        }

        let mut lifted = HashMap::with_capacity(self.selection.len());
        let mut extruded = Vec::with_capacity(self.selection.len());
        for &v in &self.selection {
            let n = self.mesh.add_vertex(self.mesh.vertex(v) + delta);
            self.mesh.add_edge(v, n);
            lifted.insert(v, n);
            extruded.push(n);
        }
        let lift = |v: u32| lifted.get(&v).copied().unwrap_or(v);

        for [a, b] in edges {
            if face_use.get(&[a, b]).copied().unwrap_or(0) <= 1 {
                self.mesh.add_face(&[a, b, lift(b), lift(a)]);
            } else {
                self.mesh.add_edge(lift(a), lift(b));
            }
        }
        for face in faces {
            let top: Vec<u32> = face.iter().map(|&v| lift(v)).collect();
            self.mesh.add_face(&top);
        }

        if extruded.len() == 1 && !self.path.is_empty() {
            self.path.extend_from_slice(&extruded);
        } else {
            self.path.clear();
        }
        self.selection = extruded;
        Ok(())
    }
}

fn dedup(vertices: impl IntoIterator<Item = u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    vertices.into_iter().filter(|v| seen.insert(*v)).collect()
}
