//! Procedural primitive generators.
//!
//! Pure functions producing flat triangle lists for the built-in shapes.
//! Output is deterministic for identical inputs and the per-shape corner
//! ordering is fixed: it decides the winding the backface culling of a
//! backend relies on, so it must not change between releases.
//!
//! Non-positive divisions/slices/stacks are caller configuration errors and
//! are not validated here; the loops simply produce an empty mesh.

use std::f32::consts::PI;

use crate::data_structures::model::{Mesh, Vertex};

/// Square grid in the XZ plane at height 0, centered at the origin.
/// `divisions`² cells, two triangles each, facing up.
pub fn plane(dimension: f32, divisions: u32) -> Mesh {
    let mut vertices = Vec::with_capacity((divisions * divisions * 6) as usize);
    let half = dimension * 0.5;
    let step = dimension / divisions as f32;
    for i in 0..divisions {
        for j in 0..divisions {
            let x0 = -half + i as f32 * step;
            let x1 = -half + (i + 1) as f32 * step;
            let z0 = -half + j as f32 * step;
            let z1 = -half + (j + 1) as f32 * step;
            vertices.push(Vertex::new(x0, 0.0, z0));
            vertices.push(Vertex::new(x1, 0.0, z1));
            vertices.push(Vertex::new(x1, 0.0, z0));

            vertices.push(Vertex::new(x0, 0.0, z0));
            vertices.push(Vertex::new(x0, 0.0, z1));
            vertices.push(Vertex::new(x1, 0.0, z1));
        }
    }
    Mesh::new(vertices)
}

/// Sphere centered at the origin: latitude bands from -90° to +90°
/// (`stacks`), longitude bands (`slices`), two triangles per UV cell.
///
/// The poles need no special case: the latitude formula collapses the band
/// radius to zero there on its own.
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> Mesh {
    let mut vertices = Vec::with_capacity((slices * stacks * 6) as usize);
    let stack_step = PI / stacks as f32;
    let slice_step = 2.0 * PI / slices as f32;
    let at = |lat: f32, lon: f32| {
        Vertex::new(
            radius * lat.cos() * lon.cos(),
            radius * lat.sin(),
            radius * lat.cos() * lon.sin(),
        )
    };
    for i in 0..stacks {
        let lat0 = i as f32 * stack_step - PI / 2.0;
        let lat1 = (i + 1) as f32 * stack_step - PI / 2.0;
        for j in 0..slices {
            let lon0 = j as f32 * slice_step;
            let lon1 = (j + 1) as f32 * slice_step;
            vertices.push(at(lat0, lon0));
            vertices.push(at(lat1, lon0));
            vertices.push(at(lat1, lon1));

            vertices.push(at(lat0, lon0));
            vertices.push(at(lat1, lon1));
            vertices.push(at(lat0, lon1));
        }
    }
    Mesh::new(vertices)
}

/// Cube centered at the origin, each face a `divisions`² grid.
///
/// One front-face generator serves all six faces, composed with six fixed
/// orthonormal maps (identity, 180° about Y, ±90° about Y, ±90° about X).
/// Each map preserves the front face's corner ordering, so the winding is
/// correct on every face without duplicating the tessellation loop.
pub fn cube(dimension: f32, divisions: u32) -> Mesh {
    let front = |x: f32, y: f32, z: f32| Vertex::new(x, y, z);
    let back = |x: f32, y: f32, z: f32| Vertex::new(-x, y, -z);
    let right = |x: f32, y: f32, z: f32| Vertex::new(z, y, -x);
    let left = |x: f32, y: f32, z: f32| Vertex::new(-z, y, x);
    let top = |x: f32, y: f32, z: f32| Vertex::new(x, z, -y);
    let bottom = |x: f32, y: f32, z: f32| Vertex::new(x, -z, y);
    let faces: [fn(f32, f32, f32) -> Vertex; 6] = [front, back, right, left, top, bottom];

    let mut vertices = Vec::with_capacity((divisions * divisions * 36) as usize);
    let half = dimension * 0.5;
    let step = dimension / divisions as f32;
    for face in faces {
        for i in 0..divisions {
            for j in 0..divisions {
                let x0 = -half + i as f32 * step;
                let x1 = -half + (i + 1) as f32 * step;
                let y0 = -half + j as f32 * step;
                let y1 = -half + (j + 1) as f32 * step;
                let v0 = face(x0, y0, half);
                let v1 = face(x1, y0, half);
                let v2 = face(x1, y1, half);
                let v3 = face(x0, y1, half);

                vertices.push(v0);
                vertices.push(v1);
                vertices.push(v2);

                vertices.push(v0);
                vertices.push(v2);
                vertices.push(v3);
            }
        }
    }
    Mesh::new(vertices)
}

/// Cone with its base on the XZ plane and apex at `(0, height, 0)`.
///
/// The base is a radial fan of `slices` triangles. The lateral surface is
/// built from `stacks` bands whose radius shrinks linearly toward the apex;
/// the final band is emitted as single triangles meeting at the apex rather
/// than a zero-area frustum ring.
pub fn cone(bottom_radius: f32, height: f32, slices: u32, stacks: u32) -> Mesh {
    let mut vertices = Vec::with_capacity((slices * 3 + slices * stacks * 6) as usize);
    for j in 0..slices {
        let a0 = 2.0 * PI * j as f32 / slices as f32;
        let a1 = 2.0 * PI * (j + 1) as f32 / slices as f32;
        vertices.push(Vertex::new(
            bottom_radius * a1.cos(),
            0.0,
            bottom_radius * a1.sin(),
        ));
        vertices.push(Vertex::new(0.0, 0.0, 0.0));
        vertices.push(Vertex::new(
            bottom_radius * a0.cos(),
            0.0,
            bottom_radius * a0.sin(),
        ));
    }
    for i in 0..stacks {
        let f0 = i as f32 / stacks as f32;
        let f1 = (i + 1) as f32 / stacks as f32;
        let y0 = f0 * height;
        let y1 = f1 * height;
        let r0 = bottom_radius * (1.0 - f0);
        let r1 = bottom_radius * (1.0 - f1);
        for j in 0..slices {
            let a0 = 2.0 * PI * j as f32 / slices as f32;
            let a1 = 2.0 * PI * (j + 1) as f32 / slices as f32;
            if i < stacks - 1 {
                vertices.push(Vertex::new(r0 * a0.cos(), y0, r0 * a0.sin()));
                vertices.push(Vertex::new(r1 * a1.cos(), y1, r1 * a1.sin()));
                vertices.push(Vertex::new(r0 * a1.cos(), y0, r0 * a1.sin()));

                vertices.push(Vertex::new(r0 * a0.cos(), y0, r0 * a0.sin()));
                vertices.push(Vertex::new(r1 * a0.cos(), y1, r1 * a0.sin()));
                vertices.push(Vertex::new(r1 * a1.cos(), y1, r1 * a1.sin()));
            } else {
                // Last band collapses to the apex point.
                vertices.push(Vertex::new(r0 * a0.cos(), y0, r0 * a0.sin()));
                vertices.push(Vertex::new(0.0, height, 0.0));
                vertices.push(Vertex::new(r0 * a1.cos(), y0, r0 * a1.sin()));
            }
        }
    }
    Mesh::new(vertices)
}

/// Flat ring in the XZ plane centered at the origin: a radial strip of
/// `slices` quads between the inner and outer radius, facing up.
pub fn ring(outer_radius: f32, inner_radius: f32, slices: u32) -> Mesh {
    let mut vertices = Vec::with_capacity((slices * 6) as usize);
    let step = 2.0 * PI / slices as f32;
    for j in 0..slices {
        let a0 = j as f32 * step;
        let a1 = (j + 1) as f32 * step;
        let inner0 = Vertex::new(inner_radius * a0.cos(), 0.0, inner_radius * a0.sin());
        let inner1 = Vertex::new(inner_radius * a1.cos(), 0.0, inner_radius * a1.sin());
        let outer0 = Vertex::new(outer_radius * a0.cos(), 0.0, outer_radius * a0.sin());
        let outer1 = Vertex::new(outer_radius * a1.cos(), 0.0, outer_radius * a1.sin());

        vertices.push(inner0);
        vertices.push(outer1);
        vertices.push(outer0);

        vertices.push(inner0);
        vertices.push(inner1);
        vertices.push(outer1);
    }
    Mesh::new(vertices)
}
