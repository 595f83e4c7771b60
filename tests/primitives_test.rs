use orrery::resources::primitives::{cone, cube, plane, ring, sphere};

mod common;

use common::test_utils::init_logging;

#[test]
fn should_tessellate_plane_grid() {
    init_logging();
    let mesh = plane(2.0, 1);
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 2);
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        assert_eq!(y, 0.0);
        assert!(x.abs() <= 1.0 && z.abs() <= 1.0);
    }

    // 2 triangles per cell, divisions^2 cells.
    assert_eq!(plane(4.0, 4).vertex_count(), 4 * 4 * 6);
}

#[test]
fn should_emit_36_vertices_for_single_division_cube() {
    init_logging();
    let mesh = cube(2.0, 1);
    // 6 faces x 2 triangles x 3 vertices.
    assert_eq!(mesh.vertex_count(), 36);
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        let max = x.abs().max(y.abs()).max(z.abs());
        assert_eq!(max, 1.0, "vertex {:?} is not on the cube surface", vertex);
        assert!(x.abs() <= 1.0 && y.abs() <= 1.0 && z.abs() <= 1.0);
    }
}

#[test]
fn should_reuse_front_face_grid_on_all_cube_faces() {
    init_logging();
    let mesh = cube(2.0, 3);
    assert_eq!(mesh.vertex_count(), 6 * 3 * 3 * 6);
    // Every face pins one coordinate to +-1; count vertices per face plane.
    let axes: [fn([f32; 3]) -> f32; 3] = [
        |v| v[2], // front/back
        |v| v[0], // right/left
        |v| v[1], // top/bottom
    ];
    for extract in axes {
        let pinned = mesh
            .vertices
            .iter()
            .filter(|v| extract(v.position).abs() == 1.0)
            .count();
        assert!(pinned >= 2 * 3 * 3 * 6, "face planes are under-populated");
    }
}

#[test]
fn should_keep_sphere_vertices_on_the_radius() {
    init_logging();
    let radius = 1.5;
    let mesh = sphere(radius, 8, 4);
    assert_eq!(mesh.vertex_count(), 8 * 4 * 6);
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        let magnitude = (x * x + y * y + z * z).sqrt();
        assert!(
            (magnitude - radius).abs() < 1e-4,
            "vertex {:?} is off the sphere",
            vertex
        );
    }
    // Poles come out of the same formula, no special casing: the bottom band
    // collapses to y = -radius.
    assert!(mesh.vertices.iter().any(|v| (v.position[1] + radius).abs() < 1e-4));
    assert!(mesh.vertices.iter().any(|v| (v.position[1] - radius).abs() < 1e-4));
}

#[test]
fn should_collapse_final_cone_band_to_the_apex() {
    init_logging();
    let slices = 6;
    let stacks = 3;
    let mesh = cone(1.0, 2.0, slices, stacks);
    // Base fan + full frustum bands + apex band of single triangles.
    let expected = slices * 3 + (stacks - 1) * slices * 6 + slices * 3;
    assert_eq!(mesh.vertex_count(), expected as usize);

    let apex_count = mesh
        .vertices
        .iter()
        .filter(|v| v.position == [0.0, 2.0, 0.0])
        .count();
    assert_eq!(apex_count as u32, slices, "one apex vertex per slice");

    // No vertex above the apex, base sits on the XZ plane.
    assert!(mesh.vertices.iter().all(|v| v.position[1] <= 2.0));
    assert!(mesh.vertices.iter().any(|v| v.position[1] == 0.0));
}

#[test]
fn should_keep_ring_between_radii() {
    init_logging();
    let mesh = ring(2.0, 1.0, 8);
    assert_eq!(mesh.vertex_count(), 8 * 6);
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        assert_eq!(y, 0.0);
        let r = (x * x + z * z).sqrt();
        assert!((1.0 - 1e-4..=2.0 + 1e-4).contains(&r), "vertex {:?} is outside the ring", vertex);
    }
}

#[test]
fn should_generate_deterministically() {
    init_logging();
    assert_eq!(sphere(1.0, 12, 6), sphere(1.0, 12, 6));
    assert_eq!(cone(1.0, 3.0, 10, 4), cone(1.0, 3.0, 10, 4));
}
