//! End-to-end drafting: primitives placed with cursors, then trimmed.

use approx::assert_relative_eq;
use glam::{DQuat, DVec3};
use tile_mesh::primitives::{cuboid, draw_cuboid, draw_triangular_prism, extrude_outline};
use tile_mesh::{difference, solve_triangle, Cursor, MeshError};

#[test]
fn test_prism_on_turned_cursor_matches_solver() {
    let mut cursor = Cursor::new(DVec3::new(5.0, -2.0, 1.0), DQuat::from_rotation_z(0.7));
    let (mesh, dims) = draw_triangular_prism(&mut cursor, 6.0, 4.0, 75.0, 2.0).unwrap();

    assert_eq!(dims.loc_a, cursor.location);
    let lengths = [
        dims.loc_a.distance(dims.loc_c),
        dims.loc_a.distance(dims.loc_b),
        dims.loc_b.distance(dims.loc_c),
    ];
    assert_relative_eq!(lengths[0], 6.0, epsilon = 1e-9);
    assert_relative_eq!(lengths[1], 4.0, epsilon = 1e-9);
    assert_relative_eq!(lengths[2], dims.a, epsilon = 1e-9);

    let area = 0.5 * 6.0 * 4.0 * 75.0_f64.to_radians().sin();
    assert_relative_eq!(mesh.volume(), area * 2.0, epsilon = 1e-9);
}

#[test]
fn test_offset_outline_trims_prism_to_footprint() {
    let dims = solve_triangle(5.0, 5.0, 60.0).unwrap();
    let mut cursor = Cursor::default();
    let (prism, _) = draw_triangular_prism(&mut cursor, 5.0, 5.0, 60.0, 1.0).unwrap();

    // a slab over the whole footprint, lifted to take the top half off
    let outline = dims.offset(1.0).map(|p| p + DVec3::Z * 0.5);
    let lid = extrude_outline(&mut cursor, &outline, 2.0).unwrap();

    let trimmed = difference(&prism, &lid);
    let (min, max) = trimmed.bounding_box();
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.z, 0.5, epsilon = 1e-9);
    assert_relative_eq!(trimmed.volume(), prism.volume() / 2.0, epsilon = 1e-9);
}

#[test]
fn test_cursor_is_reusable_across_primitives() {
    let mut cursor = Cursor::at(DVec3::new(1.0, 1.0, 0.0));
    let a = draw_cuboid(&mut cursor, DVec3::ONE).unwrap();
    let b = draw_cuboid(&mut cursor, DVec3::ONE).unwrap();
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(cursor, Cursor::at(DVec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn test_degenerate_inputs_surface_as_errors() {
    assert!(matches!(
        solve_triangle(0.0, 1.0, 90.0),
        Err(MeshError::DegenerateTriangle { .. })
    ));
    assert!(matches!(
        cuboid(DVec3::new(1.0, 0.0, 1.0)),
        Err(MeshError::DegenerateGeometry { .. })
    ));
}
