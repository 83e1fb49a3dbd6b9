//! # Tile Pieces
//!
//! Meshes tagged with the role they play in a tile.

use glam::DVec3;
use tile_mesh::Mesh;

/// What a piece is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryRole {
    /// Printed base carrying the interlock.
    Base,
    /// Printed wall core.
    Core,
    /// Textured preview slab.
    Preview,
    /// Displacement slab paired with a preview slab.
    Displacement,
    /// Subtraction volume bounding the final silhouette.
    Trimmer,
    /// Subtraction volume cutting the interlock.
    Cutter,
}

impl GeometryRole {
    /// Lower-case role name.
    pub fn name(self) -> &'static str {
        match self {
            GeometryRole::Base => "base",
            GeometryRole::Core => "core",
            GeometryRole::Preview => "preview",
            GeometryRole::Displacement => "displacement",
            GeometryRole::Trimmer => "trimmer",
            GeometryRole::Cutter => "cutter",
        }
    }

    /// True for pieces that only exist to be subtracted from others.
    pub fn is_subtractor(self) -> bool {
        match self {
            GeometryRole::Trimmer | GeometryRole::Cutter => true,
            GeometryRole::Base
            | GeometryRole::Core
            | GeometryRole::Preview
            | GeometryRole::Displacement => false,
        }
    }

    /// Whether pieces of this role start out hidden.
    pub fn hidden_by_default(self) -> bool {
        match self {
            GeometryRole::Displacement | GeometryRole::Trimmer | GeometryRole::Cutter => true,
            GeometryRole::Base | GeometryRole::Core | GeometryRole::Preview => false,
        }
    }
}

/// A named mesh with its role and scene relationships.
#[derive(Debug, Clone)]
pub struct TilePiece {
    /// Unique name within the tile.
    pub name: String,
    /// Role tag.
    pub role: GeometryRole,
    /// Geometry in world space.
    pub mesh: Mesh,
    /// Object origin.
    pub origin: DVec3,
    /// Name of the piece this one is parented to.
    pub parent: Option<String>,
    /// Hidden in the host's viewport.
    pub hidden: bool,
    /// Name of the paired preview or displacement piece.
    pub linked: Option<String>,
}

impl TilePiece {
    /// Creates an unparented piece with the role's default visibility.
    pub fn new(name: impl Into<String>, role: GeometryRole, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            role,
            mesh,
            origin: DVec3::ZERO,
            parent: None,
            hidden: role.hidden_by_default(),
            linked: None,
        }
    }

    /// Sets the parent piece.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the object origin.
    pub fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }
}

/// Links a preview slab and its displacement slab to each other.
pub fn link_pair(preview: &mut TilePiece, displacement: &mut TilePiece) {
    preview.linked = Some(displacement.name.clone());
    displacement.linked = Some(preview.name.clone());
}

/// `<tile>.<suffix>` for printed pieces.
pub(crate) fn piece_name(tile_name: &str, suffix: &str) -> String {
    format!("{tile_name}.{suffix}")
}

/// `<prefix>_<face>.<tile>` for subtractors.
pub(crate) fn subtractor_name(prefix: &str, face: &str, tile_name: &str) -> String {
    format!("{prefix}_{face}.{tile_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtractors_hidden() {
        for role in [GeometryRole::Trimmer, GeometryRole::Cutter] {
            assert!(role.is_subtractor());
            assert!(TilePiece::new("x", role, Mesh::new()).hidden);
        }
        assert!(!TilePiece::new("x", GeometryRole::Base, Mesh::new()).hidden);
    }

    #[test]
    fn test_link_pair_both_ways() {
        let mut preview = TilePiece::new("wall.slab.preview", GeometryRole::Preview, Mesh::new());
        let mut disp = TilePiece::new(
            "wall.slab.displacement",
            GeometryRole::Displacement,
            Mesh::new(),
        );
        link_pair(&mut preview, &mut disp);
        assert_eq!(preview.linked.as_deref(), Some("wall.slab.displacement"));
        assert_eq!(disp.linked.as_deref(), Some("wall.slab.preview"));
        assert!(disp.hidden);
    }

    #[test]
    fn test_names() {
        assert_eq!(piece_name("floor", "base"), "floor.base");
        assert_eq!(subtractor_name("trimmer", "x_neg", "floor"), "trimmer_x_neg.floor");
    }
}
