//! Mesh and model data for scene rendering.
//!
//! A [`Mesh`] is a flat triangle list: three [`Vertex`] entries per triangle,
//! no index buffer. A [`Model`] couples one cached mesh with the device buffer
//! handle it was uploaded under. Models are created once while the scene is
//! built and are immutable afterwards; every scene node referencing the same
//! model name shares a single `Rc<Model>`.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;

use crate::context::BufferHandle;

/// A single mesh vertex: three float coordinates.
///
/// `#[repr(C)]` and `Pod` so a whole mesh can be cast to bytes and handed to
/// a device buffer upload in one piece.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

impl From<cgmath::Vector3<f32>> for Vertex {
    fn from(v: cgmath::Vector3<f32>) -> Self {
        Self { position: v.into() }
    }
}

impl From<Vertex> for cgmath::Vector3<f32> {
    fn from(v: Vertex) -> Self {
        v.position.into()
    }
}

/// An ordered flat triangle list, three vertices per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Persists the mesh in the `.3d` exchange format: the vertex count on
    /// the first line, then one `x y z` line per vertex.
    pub fn write_3d(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating model file {}", path.display()))?;
        let mut out = BufWriter::new(file);
        writeln!(out, "{}", self.vertices.len())?;
        for vertex in &self.vertices {
            let [x, y, z] = vertex.position;
            writeln!(out, "{} {} {}", x, y, z)?;
        }
        Ok(())
    }
}

/// A named, cached model: the mesh that was loaded or generated for a name
/// plus the device buffer handle it was uploaded under.
#[derive(Debug)]
pub struct Model {
    pub name: String,
    pub mesh: Mesh,
    pub handle: BufferHandle,
}

impl Model {
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}
