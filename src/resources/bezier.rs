//! Bicubic Bezier patch sources and tessellation.
//!
//! A patch source holds one or more 4x4 control grids, each given as 16
//! indices into a shared control-point pool so neighboring patches can share
//! points. Tessellation samples every patch on a regular parameter grid with
//! the cubic Bernstein basis and emits two triangles per cell.

use std::{fs, path::Path};

use anyhow::{Context, bail};
use cgmath::Vector3;

use crate::data_structures::model::{Mesh, Vertex};

/// A set of bicubic Bezier patches over a shared control-point pool.
#[derive(Debug, Clone)]
pub struct PatchSet {
    pub patches: Vec<[usize; 16]>,
    pub control_points: Vec<Vector3<f32>>,
}

impl PatchSet {
    /// Reads a patch source file.
    ///
    /// Expected layout: patch count; per patch one line of 16 comma-separated
    /// pool indices; control-point count; per point one line of 3
    /// comma-separated coordinates. Short or unparsable data is a fatal
    /// error for the source.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading patch file {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("parsing patch file {}", path.display()))
    }

    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut lines = source.lines().filter(|line| !line.trim().is_empty());
        let mut next_line = |what: &str| {
            lines
                .next()
                .with_context(|| format!("unexpected end of patch data, expected {}", what))
        };

        let patch_count: usize = next_line("patch count")?
            .trim()
            .parse()
            .context("patch count is not a number")?;
        let mut patches = Vec::with_capacity(patch_count);
        for p in 0..patch_count {
            let line = next_line("patch indices")?;
            let mut indices = [0usize; 16];
            let mut fields = line.split(',');
            for (i, slot) in indices.iter_mut().enumerate() {
                *slot = fields
                    .next()
                    .with_context(|| format!("patch {} has fewer than 16 indices", p))?
                    .trim()
                    .parse()
                    .with_context(|| format!("patch {} index {} is not a number", p, i))?;
            }
            patches.push(indices);
        }

        let point_count: usize = next_line("control-point count")?
            .trim()
            .parse()
            .context("control-point count is not a number")?;
        let mut control_points = Vec::with_capacity(point_count);
        for p in 0..point_count {
            let line = next_line("control point")?;
            let mut coords = [0f32; 3];
            let mut fields = line.split(',');
            for slot in coords.iter_mut() {
                *slot = fields
                    .next()
                    .with_context(|| format!("control point {} has fewer than 3 coordinates", p))?
                    .trim()
                    .parse()
                    .with_context(|| format!("control point {} is not numeric", p))?;
            }
            control_points.push(Vector3::new(coords[0], coords[1], coords[2]));
        }

        for (p, patch) in patches.iter().enumerate() {
            if let Some(index) = patch.iter().find(|&&index| index >= control_points.len()) {
                bail!(
                    "patch {} references control point {} but the pool has {}",
                    p,
                    index,
                    control_points.len()
                );
            }
        }

        Ok(Self {
            patches,
            control_points,
        })
    }

    /// Tessellates every patch on a `(tessellation + 1)`² sample grid and
    /// returns the combined triangle list.
    ///
    /// Every sample blends all 16 control points of its patch with the cubic
    /// Bernstein basis. The Bernstein basis is one-hot at parameter 0 and 1,
    /// so the grid corners interpolate the corner control points exactly.
    pub fn tessellate(&self, tessellation: u32) -> Mesh {
        let n = tessellation as usize;
        let mut vertices = Vec::with_capacity(self.patches.len() * n * n * 6);
        let mut grid = vec![Vector3::new(0.0, 0.0, 0.0); (n + 1) * (n + 1)];
        for patch in &self.patches {
            for iu in 0..=n {
                let u = iu as f32 / n as f32;
                let bu = bernstein(u);
                for iv in 0..=n {
                    let v = iv as f32 / n as f32;
                    let bv = bernstein(v);
                    let mut sum = Vector3::new(0.0, 0.0, 0.0);
                    for i in 0..4 {
                        for j in 0..4 {
                            sum += self.control_points[patch[i * 4 + j]] * (bu[i] * bv[j]);
                        }
                    }
                    grid[iu * (n + 1) + iv] = sum;
                }
            }
            for i in 0..n {
                for j in 0..n {
                    let idx = i * (n + 1) + j;
                    let v00 = grid[idx];
                    let v10 = grid[idx + 1];
                    let v01 = grid[idx + (n + 1)];
                    let v11 = grid[idx + (n + 1) + 1];

                    vertices.push(Vertex::from(v00));
                    vertices.push(Vertex::from(v10));
                    vertices.push(Vertex::from(v01));

                    vertices.push(Vertex::from(v10));
                    vertices.push(Vertex::from(v11));
                    vertices.push(Vertex::from(v01));
                }
            }
        }
        Mesh::new(vertices)
    }
}

/// The four cubic Bernstein weights at `t`.
fn bernstein(t: f32) -> [f32; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t]
}
