//! Curved walls and curved floors.
//!
//! Wall trimmers are drafted straight along X, cut into strips, and bent
//! onto the wall's circle with a padded sweep. The end trimmers stay flat
//! and are swung about the circle centre onto the wall ends.

use config::constants::{CURVED_TRIM_ARC_PADDING, MAX_TRIM_ARC};
use glam::{DQuat, DVec3};
use tile_mesh::primitives::{draw_curved_floor, draw_curved_slab, CurveType};
use tile_mesh::{Cursor, Mesh, MeshError, TriangleDimensions, Turtle};

use super::{edge_trimmer, footprint, z_trimmers, Trim, TrimVolume};
use crate::error::TileError;
use crate::properties::{Blueprint, CurvedTileProps};
use crate::tiles::boxed;
use crate::tiles::curved::WallArc;

// =============================================================================
// WALLS
// =============================================================================

pub(super) fn wall_trimmers(
    trim: Trim,
    blueprint: Blueprint,
    props: &CurvedTileProps,
    degrees_of_arc: f64,
) -> Result<Vec<TrimVolume>, TileError> {
    let arc = WallArc::new(props.radius, degrees_of_arc, props.segments);
    let depth_y = if blueprint == Blueprint::None {
        props.tile_size.y
    } else {
        props.tile_size.y.max(props.base_size.y)
    };
    let half = depth_y / 2.0;
    let height = props.tile_size.z;
    let (pad, depth) = (trim.pad(), trim.depth());

    // never reach more than halfway from the inner face to the centre
    let inner_limit = (arc.radius + half) / 2.0;
    let inward = |reach: f64| reach.min(inner_limit);
    let radial = Radial { sign: arc.sign };

    let padded_sweep = (arc.sweep + CURVED_TRIM_ARC_PADDING).min(MAX_TRIM_ARC);
    let bent = |offsets: (f64, f64), z: (f64, f64)| -> Result<Mesh, MeshError> {
        let mut mesh = strip(arc.length(), arc.segments, radial.to_y(offsets), z)?;
        arc.bend(&mut mesh, padded_sweep)?;
        Ok(mesh)
    };

    let outer = bent((half, half + depth), (-pad, height + pad))?;
    let inner = bent((-inward(half + depth), -half), (-pad, height + pad))?;
    let across = (-inward(half + pad), half + pad);
    let top = bent(across, (height, height + depth))?;
    let bottom = bent(across, (-depth, 0.0))?;

    // outward radial offsets land on -Y before bending when the wall bends
    // toward +Y
    let (outer_face, inner_face) = if arc.sign > 0.0 {
        ("y_neg", "y_pos")
    } else {
        ("y_pos", "y_neg")
    };

    let (y0, y1) = radial.to_y(across);
    let end_size = DVec3::new(depth, y1 - y0, height + 2.0 * pad);
    let end = |x0: f64, turn: f64| -> Result<Mesh, MeshError> {
        let mut mesh = boxed(DVec3::new(x0, y0, -pad), end_size)?;
        mesh.rotate_about(
            DQuat::from_rotation_z((turn * arc.sign * arc.sweep / 2.0).to_radians()),
            arc.centre(),
        );
        Ok(mesh)
    };

    let centre = arc.centre();
    Ok(vec![
        TrimVolume::new("x_neg", end(-depth, -1.0)?).about(centre),
        TrimVolume::new("x_pos", end(0.0, 1.0)?).about(centre),
        TrimVolume::new(outer_face, outer).about(centre),
        TrimVolume::new(inner_face, inner).about(centre),
        TrimVolume::new("z_pos", top).about(centre),
        TrimVolume::new("z_neg", bottom).about(centre),
    ])
}

/// Converts radial offsets from the centreline into unbent Y.
#[derive(Debug, Clone, Copy)]
struct Radial {
    sign: f64,
}

impl Radial {
    fn to_y(self, (lo, hi): (f64, f64)) -> (f64, f64) {
        let (a, b) = (-self.sign * lo, -self.sign * hi);
        (a.min(b), a.max(b))
    }
}

/// Box spanning `[-length/2, length/2]` in X, drafted as `segments` strips
/// so it can be bent.
fn strip(length: f64, segments: u32, y: (f64, f64), z: (f64, f64)) -> Result<Mesh, MeshError> {
    let step = length / f64::from(segments.max(1));
    let mut cursor = Cursor::at(DVec3::new(-length / 2.0, y.0, z.0));
    let mut mesh = Turtle::draft(&mut cursor, |t| {
        t.add_vert();
        t.pen_down();
        t.fd(y.1 - y.0)?;
        t.select_all();
        for _ in 0..segments.max(1) {
            t.ri(step)?;
        }
        t.select_all();
        t.up(z.1 - z.0)
    })?;
    mesh.recalculate_normals()?;
    Ok(mesh)
}

// =============================================================================
// FLOORS
// =============================================================================

pub(super) fn floor_trimmers(
    trim: Trim,
    props: &CurvedTileProps,
    dims: &TriangleDimensions,
    angle: f64,
    curve_type: CurveType,
) -> Result<Vec<TrimVolume>, TileError> {
    let height = props.tile_size.z;
    let radius = props.radius;
    let (pad, depth) = (trim.pad(), trim.depth());
    let (a, b, c) = (flat(dims.loc_a), flat(dims.loc_b), flat(dims.loc_c));

    // straight legs are sides c (A→B) and b (C→A); the arc replaces side a
    let side_c = edge_trimmer(trim, a, b, angle, 90.0, height)?;
    let side_b = edge_trimmer(trim, c, a, 90.0, angle, height)?;

    // pad the sweep by one chord each side so chord vertices stay aligned
    let chord = angle / f64::from(props.segments);
    let arc = match curve_type {
        CurveType::Pos => {
            let (spare, extra) = if angle + 2.0 * chord < 360.0 { (chord, 2) } else { (0.0, 0) };
            let mut cursor = Cursor::facing(a - DVec3::Z * pad, turned(c - a, spare));
            draw_curved_slab(
                &mut cursor,
                radius + depth,
                angle + 2.0 * spare,
                height + 2.0 * pad,
                depth,
                props.segments + extra,
            )?
        }
        CurveType::Neg => {
            let far = b + c - a;
            let (spare, extra) = if angle + 2.0 * chord < 180.0 { (chord, 2) } else { (0.0, 0) };
            let mut cursor = Cursor::facing(far - DVec3::Z * pad, turned(b - far, spare));
            let (pie, _) = draw_curved_floor(
                &mut cursor,
                radius,
                angle + 2.0 * spare,
                height + 2.0 * pad,
                props.segments + extra,
                CurveType::Pos,
            )?;
            pie
        }
    };

    let (min, max) = footprint(floor_outline(dims, radius, angle, props.segments, curve_type));
    let mut volumes = vec![
        TrimVolume::new("side_c", side_c),
        TrimVolume::new("side_a", arc),
        TrimVolume::new("side_b", side_b),
    ];
    volumes.extend(z_trimmers(trim, min, max, height)?);
    Ok(volumes)
}

/// Corner and arc vertices of a curved floor's footprint.
pub(crate) fn floor_outline(
    dims: &TriangleDimensions,
    radius: f64,
    angle: f64,
    segments: u32,
    curve_type: CurveType,
) -> Vec<DVec3> {
    let (a, b, c) = (flat(dims.loc_a), flat(dims.loc_b), flat(dims.loc_c));
    let (centre, start) = match curve_type {
        CurveType::Pos => (a, c - a),
        CurveType::Neg => {
            let far = b + c - a;
            (far, b - far)
        }
    };
    let start = start.normalize_or_zero() * radius;
    let mut outline = Vec::with_capacity(segments as usize + 2);
    outline.push(a);
    outline.extend((0..=segments).map(|i| {
        let swept = -angle * f64::from(i) / f64::from(segments.max(1));
        centre + turned(start, swept)
    }));
    outline
}

/// `v` turned counter-clockwise about +Z by `degrees`.
fn turned(v: DVec3, degrees: f64) -> DVec3 {
    DQuat::from_rotation_z(degrees.to_radians()) * v
}

fn flat(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::CurvedForm;
    use approx::assert_relative_eq;
    use tile_mesh::solve_triangle;

    fn wall(degrees_of_arc: f64) -> CurvedTileProps {
        CurvedTileProps {
            radius: 5.0,
            segments: 12,
            tile_size: DVec3::new(0.0, 0.5, 2.0),
            base_size: DVec3::ZERO,
            form: CurvedForm::Wall { degrees_of_arc },
        }
    }

    fn radius_range(mesh: &Mesh, centre: DVec3) -> (f64, f64) {
        mesh.vertices()
            .iter()
            .map(|v| (v.truncate() - centre.truncate()).length())
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }

    #[test]
    fn test_strip_is_closed() {
        let mesh = strip(4.0, 6, (0.0, 1.0), (0.0, 1.0)).unwrap();
        assert!(mesh.check_manifold().is_ok());
        assert_relative_eq!(mesh.volume(), 4.0, epsilon = 1e-9);
        assert_eq!(mesh.vertex_count(), 28);
    }

    #[test]
    fn test_wall_side_trimmers_hug_faces() {
        for degrees in [90.0, -90.0] {
            let props = wall(degrees);
            let volumes = wall_trimmers(Trim::new(0.0), Blueprint::None, &props, degrees).unwrap();
            let centre = WallArc::new(5.0, degrees, 12).centre();
            let faces: Vec<&str> = volumes.iter().map(|v| v.face.as_str()).collect();
            let outer = if degrees > 0.0 { "y_neg" } else { "y_pos" };
            let idx = faces.iter().position(|f| *f == outer).unwrap();
            let (lo, hi) = radius_range(&volumes[idx].mesh, centre);
            assert_relative_eq!(lo, 5.25, epsilon = 1e-9);
            assert_relative_eq!(hi, 5.75, epsilon = 1e-9);
            assert!(volumes[idx].mesh.check_manifold().is_ok());
            assert_eq!(volumes[idx].origin, centre);
        }
    }

    #[test]
    fn test_wall_end_trimmers_swing_to_ends() {
        let props = wall(60.0);
        let volumes = wall_trimmers(Trim::new(0.0), Blueprint::None, &props, 60.0).unwrap();
        let arc = WallArc::new(5.0, 60.0, 12);
        // the wall end at +30° lies on the x_pos trimmer's inner face
        let tip = arc.point(5.0, 30f64.to_radians(), 1.0);
        let x_pos = &volumes[1].mesh;
        let nearest = x_pos
            .vertices()
            .iter()
            .map(|v| {
                let radial = (*v - arc.centre()).truncate().normalize();
                let tip_radial = (tip - arc.centre()).truncate().normalize();
                radial.perp_dot(tip_radial).abs()
            })
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1e-9);
        // and the trimmer lies beyond the end, away from the wall
        let (min, _) = x_pos.bounding_box();
        assert!(min.x > 0.0);
    }

    #[test]
    fn test_floor_trimmers_pos() {
        let props = CurvedTileProps {
            radius: 3.0,
            segments: 8,
            tile_size: DVec3::new(0.0, 0.0, 0.5),
            base_size: DVec3::ZERO,
            form: CurvedForm::Floor {
                angle: 90.0,
                curve_type: CurveType::Pos,
            },
        };
        let dims = solve_triangle(3.0, 3.0, 90.0).unwrap();
        let volumes = floor_trimmers(Trim::new(0.0), &props, &dims, 90.0, CurveType::Pos).unwrap();
        let faces: Vec<&str> = volumes.iter().map(|v| v.face.as_str()).collect();
        assert_eq!(faces, ["side_c", "side_a", "side_b", "z_pos", "z_neg"]);

        let (lo, hi) = radius_range(&volumes[1].mesh, DVec3::ZERO);
        assert_relative_eq!(lo, 3.0, epsilon = 1e-9);
        assert_relative_eq!(hi, 3.0 + 0.5, epsilon = 1e-9);
        for volume in &volumes {
            assert!(volume.mesh.check_manifold().is_ok(), "{}", volume.face);
        }
    }

    #[test]
    fn test_floor_outline_neg_stays_in_rhombus() {
        let dims = solve_triangle(2.0, 2.0, 90.0).unwrap();
        let outline = floor_outline(&dims, 2.0, 90.0, 8, CurveType::Neg);
        assert_eq!(outline.len(), 10);
        let (min, max) = footprint(outline);
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 2.0, epsilon = 1e-12);
    }
}
