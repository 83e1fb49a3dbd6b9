//! # Tile Assembly
//!
//! Builds every piece of a tile and records how subtractors attach to the
//! printed pieces. Trimmers attach to every printed piece, disabled, so the
//! host can switch on the faces it wants trimmed; cutters attach to the
//! piece they are parented to, enabled.
//!
//! ## Example
//!
//! ```rust
//! use tile_gen::{build_tile, GeometryRole, ProceduralPrototypes, TileProperties};
//!
//! let props = TileProperties::from_json(r#"{
//!     "tile_name": "wall",
//!     "shape": {
//!         "type": "rectangular",
//!         "kind": "wall",
//!         "tile_size": [2.0, 0.3, 2.0]
//!     }
//! }"#).unwrap();
//!
//! let tile = build_tile(&props, &ProceduralPrototypes).unwrap();
//! assert!(tile.piece("wall.base").is_some());
//! assert_eq!(tile.pieces_with_role(GeometryRole::Trimmer).count(), 6);
//! ```

use tile_mesh::{difference_all, Mesh, TriangleDimensions};
use tracing::debug;

use crate::cutters::{
    generate_clip_cutters, generate_slot_cutter, generate_wall_side_cutters, PrototypeLibrary,
};
use crate::error::TileError;
use crate::piece::{GeometryRole, TilePiece};
use crate::properties::TileProperties;
use crate::tiles::build_body;
use crate::trimmers::generate_trimmers;

/// A boolean-difference record: subtract `operand` from `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanModifier {
    /// Modifier name, the same as the operand's.
    pub name: String,
    /// Piece the modifier sits on.
    pub target: String,
    /// Piece subtracted.
    pub operand: String,
    /// Whether the host applies it.
    pub enabled: bool,
}

/// Every piece of one tile plus the modifiers joining them.
#[derive(Debug, Clone)]
pub struct TileAssembly {
    /// Printed pieces followed by trimmers and cutters.
    pub pieces: Vec<TilePiece>,
    /// Boolean-difference records.
    pub modifiers: Vec<BooleanModifier>,
    /// Triangle the tile was built on, for triangular and curved floors.
    pub dimensions: Option<TriangleDimensions>,
}

impl TileAssembly {
    /// Looks up a piece by name.
    pub fn piece(&self, name: &str) -> Option<&TilePiece> {
        self.pieces.iter().find(|p| p.name == name)
    }

    /// Pieces with a given role, in build order.
    pub fn pieces_with_role(&self, role: GeometryRole) -> impl Iterator<Item = &TilePiece> {
        self.pieces.iter().filter(move |p| p.role == role)
    }

    /// Modifiers sitting on a piece.
    pub fn modifiers_for<'a>(
        &'a self,
        target: &'a str,
    ) -> impl Iterator<Item = &'a BooleanModifier> + 'a {
        self.modifiers.iter().filter(move |m| m.target == target)
    }

    /// Switches every trimmer modifier on or off.
    pub fn set_trimmers_enabled(&mut self, enabled: bool) {
        let trimmers: Vec<String> = self
            .pieces_with_role(GeometryRole::Trimmer)
            .map(|p| p.name.clone())
            .collect();
        for modifier in &mut self.modifiers {
            if trimmers.contains(&modifier.operand) {
                modifier.enabled = enabled;
            }
        }
    }

    /// Applies a piece's modifiers and returns the resulting mesh.
    ///
    /// With `include_disabled` every modifier is applied, not only the
    /// enabled ones.
    ///
    /// # Errors
    ///
    /// [`TileError::UnknownPiece`] if the piece or one of its operands does
    /// not exist.
    pub fn evaluate(&self, name: &str, include_disabled: bool) -> Result<Mesh, TileError> {
        let piece = self
            .piece(name)
            .ok_or_else(|| TileError::unknown_piece(name))?;
        let operands = self
            .modifiers_for(name)
            .filter(|m| m.enabled || include_disabled)
            .map(|m| {
                self.piece(&m.operand)
                    .map(|p| &p.mesh)
                    .ok_or_else(|| TileError::unknown_piece(m.operand.as_str()))
            })
            .collect::<Result<Vec<&Mesh>, TileError>>()?;
        Ok(difference_all(&piece.mesh, operands))
    }
}

/// Builds a complete tile: printed pieces, trimmers, OpenLOCK cutters and
/// the modifiers joining them.
///
/// Any failure abandons the whole tile.
pub fn build_tile(
    props: &TileProperties,
    library: &dyn PrototypeLibrary,
) -> Result<TileAssembly, TileError> {
    props.validate()?;
    let props = props.resolved();
    let body = build_body(&props)?;
    let dims = body.dimensions.as_ref();

    let trimmers = generate_trimmers(&props, dims)?;
    let mut cutters = Vec::new();
    if let Some(base) = body.pieces.iter().find(|p| p.role == GeometryRole::Base) {
        cutters.extend(generate_clip_cutters(base, dims, &props, library)?);
        cutters.extend(generate_slot_cutter(base, &props)?);
    }
    if let Some(core) = body.pieces.iter().find(|p| p.role == GeometryRole::Core) {
        cutters.extend(generate_wall_side_cutters(core, &props, library)?);
    }

    let mut modifiers = Vec::with_capacity(body.pieces.len() * trimmers.len() + cutters.len());
    for piece in &body.pieces {
        modifiers.extend(trimmers.iter().map(|trimmer| BooleanModifier {
            name: trimmer.name.clone(),
            target: piece.name.clone(),
            operand: trimmer.name.clone(),
            enabled: false,
        }));
    }
    for cutter in &cutters {
        if let Some(owner) = &cutter.parent {
            modifiers.push(BooleanModifier {
                name: cutter.name.clone(),
                target: owner.clone(),
                operand: cutter.name.clone(),
                enabled: true,
            });
        }
    }

    debug!(
        tile = %props.tile_name,
        shape = props.shape.name(),
        printed = body.pieces.len(),
        trimmers = trimmers.len(),
        cutters = cutters.len(),
        "built tile"
    );

    let mut pieces = body.pieces;
    pieces.extend(trimmers);
    pieces.extend(cutters);
    Ok(TileAssembly {
        pieces,
        modifiers,
        dimensions: body.dimensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cutters::ProceduralPrototypes;
    use crate::properties::{Blueprint, RectangularKind, RectangularTileProps, TileShape};
    use glam::DVec3;

    fn floor(blueprint: Blueprint) -> TileProperties {
        TileProperties {
            tile_name: "floor".into(),
            buffer: 0.001,
            blueprint,
            shape: TileShape::Rectangular(RectangularTileProps {
                tile_size: DVec3::new(2.0, 2.0, 0.5),
                base_size: DVec3::new(2.0, 2.0, 0.25),
                kind: RectangularKind::Floor,
            }),
        }
    }

    #[test]
    fn test_trimmers_attach_disabled_to_every_printed_piece() {
        let tile = build_tile(&floor(Blueprint::Plain), &ProceduralPrototypes).unwrap();
        for name in ["floor.base", "floor.slab.preview", "floor.slab.displacement"] {
            let mods: Vec<_> = tile.modifiers_for(name).collect();
            assert_eq!(mods.len(), 6, "{name}");
            assert!(mods.iter().all(|m| !m.enabled));
        }
        for trimmer in tile.pieces_with_role(GeometryRole::Trimmer) {
            assert_eq!(trimmer.parent.as_deref(), Some("floor.base"));
            assert!(trimmer.hidden);
        }
    }

    #[test]
    fn test_cutters_attach_enabled_to_owner() {
        let tile = build_tile(&floor(Blueprint::OpenLock), &ProceduralPrototypes).unwrap();
        let cutters: Vec<_> = tile.pieces_with_role(GeometryRole::Cutter).collect();
        // a 2 × 2 base holds one clip per side
        assert_eq!(cutters.len(), 4);
        let enabled: Vec<_> = tile.modifiers_for("floor.base").filter(|m| m.enabled).collect();
        assert_eq!(enabled.len(), 4);
    }

    #[test]
    fn test_evaluate_applies_enabled_modifiers() {
        let tile = build_tile(&floor(Blueprint::OpenLock), &ProceduralPrototypes).unwrap();
        let base = tile.piece("floor.base").unwrap().mesh.volume();
        let cut = tile.evaluate("floor.base", false).unwrap().volume();
        // four 0.5 × 0.65 × 0.1 clip channels inside the base
        assert!((base - cut - 0.13).abs() < 1e-9, "removed {}", base - cut);
    }

    #[test]
    fn test_set_trimmers_enabled() {
        let mut tile = build_tile(&floor(Blueprint::Plain), &ProceduralPrototypes).unwrap();
        tile.set_trimmers_enabled(true);
        assert!(tile.modifiers.iter().all(|m| m.enabled));
    }

    #[test]
    fn test_evaluate_unknown_piece() {
        let tile = build_tile(&floor(Blueprint::Plain), &ProceduralPrototypes).unwrap();
        let err = tile.evaluate("floor.missing", false).unwrap_err();
        assert!(matches!(err, TileError::UnknownPiece { .. }));
    }

    #[test]
    fn test_invalid_properties_abort_build() {
        let mut props = floor(Blueprint::Plain);
        props.tile_name = String::new();
        assert!(build_tile(&props, &ProceduralPrototypes).is_err());
    }
}
