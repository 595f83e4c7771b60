//! Resource loading and the model cache.
//!
//! [`ModelStore`] resolves model names to cached geometry. A name is resolved
//! at most once per store: the first `load` reads persisted vertex data or
//! runs a generator, uploads the mesh to the backend and caches mesh and
//! buffer handle together; every later `load` of the same name returns the
//! same shared entry. Loading happens synchronously while the scene is
//! built, there is no background streaming.

pub mod bezier;
pub mod primitives;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{Context, bail};
use log::info;

use crate::{
    context::RenderBackend,
    data_structures::model::{Mesh, Model, Vertex},
    resources::bezier::PatchSet,
};

/// A procedural recipe, mirroring the generator tool's parameter sets.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveSpec {
    Plane {
        dimension: f32,
        divisions: u32,
    },
    Box {
        dimension: f32,
        divisions: u32,
    },
    Sphere {
        radius: f32,
        slices: u32,
        stacks: u32,
    },
    Cone {
        bottom_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    Ring {
        outer_radius: f32,
        inner_radius: f32,
        slices: u32,
    },
}

impl PrimitiveSpec {
    pub fn generate(&self) -> Mesh {
        match *self {
            PrimitiveSpec::Plane {
                dimension,
                divisions,
            } => primitives::plane(dimension, divisions),
            PrimitiveSpec::Box {
                dimension,
                divisions,
            } => primitives::cube(dimension, divisions),
            PrimitiveSpec::Sphere {
                radius,
                slices,
                stacks,
            } => primitives::sphere(radius, slices, stacks),
            PrimitiveSpec::Cone {
                bottom_radius,
                height,
                slices,
                stacks,
            } => primitives::cone(bottom_radius, height, slices, stacks),
            PrimitiveSpec::Ring {
                outer_radius,
                inner_radius,
                slices,
            } => primitives::ring(outer_radius, inner_radius, slices),
        }
    }
}

/// Where the geometry behind a model name comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    /// A persisted `.3d` model file at an explicit path.
    File(PathBuf),
    /// Generated on first load from a primitive recipe.
    Primitive(PrimitiveSpec),
    /// Generated on first load by tessellating a Bezier patch source.
    Patch { path: PathBuf, tessellation: u32 },
}

/// Cache of named models and their uploaded buffers.
///
/// Names without a registered [`ModelSource`] resolve to a persisted model
/// file of that name under the store's root directory.
#[derive(Debug)]
pub struct ModelStore {
    root_dir: PathBuf,
    sources: HashMap<String, ModelSource>,
    cache: HashMap<String, Rc<Model>>,
}

impl ModelStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            sources: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Associates a name with an explicit geometry source. Replaces any
    /// earlier registration; has no effect on names already cached.
    pub fn register(&mut self, name: &str, source: ModelSource) {
        self.sources.insert(name.to_string(), source);
    }

    /// Resolves a name to its cached model, loading and uploading it first
    /// if this is the first reference.
    ///
    /// Fails if no backing data exists for the name, or the backing data is
    /// unreadable or malformed.
    pub fn load(
        &mut self,
        name: &str,
        backend: &mut dyn RenderBackend,
    ) -> anyhow::Result<Rc<Model>> {
        if let Some(model) = self.cache.get(name) {
            return Ok(Rc::clone(model));
        }

        let mesh = match self.sources.get(name) {
            Some(ModelSource::File(path)) => read_model_3d(path)?,
            Some(ModelSource::Primitive(spec)) => spec.generate(),
            Some(ModelSource::Patch { path, tessellation }) => {
                PatchSet::from_file(path)?.tessellate(*tessellation)
            }
            None => {
                let path = self.root_dir.join(name);
                if !path.is_file() {
                    bail!(
                        "no backing data for model {:?} (no registered source, no file in {})",
                        name,
                        self.root_dir.display()
                    );
                }
                read_model_3d(&path)?
            }
        };

        let handle = backend.upload_buffer(&mesh.vertices);
        info!(
            "loaded model {:?}: {} vertices, buffer {:?}",
            name,
            mesh.vertex_count(),
            handle
        );
        let model = Rc::new(Model {
            name: name.to_string(),
            mesh,
            handle,
        });
        self.cache.insert(name.to_string(), Rc::clone(&model));
        Ok(model)
    }

    /// The cached model for a name, if it was loaded before.
    pub fn get(&self, name: &str) -> Option<Rc<Model>> {
        self.cache.get(name).map(Rc::clone)
    }

    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }
}

/// Reads a persisted `.3d` model file: a vertex count followed by one line
/// of 3 numbers per vertex, a flat triangle list with no indices.
pub fn read_model_3d(path: &Path) -> anyhow::Result<Mesh> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading model file {}", path.display()))?;
    parse_model_3d(&text).with_context(|| format!("parsing model file {}", path.display()))
}

fn parse_model_3d(text: &str) -> anyhow::Result<Mesh> {
    let mut numbers = text.split_whitespace();
    let count: usize = numbers
        .next()
        .context("missing vertex count")?
        .parse()
        .context("vertex count is not a number")?;
    let mut vertices = Vec::with_capacity(count);
    for i in 0..count {
        let mut position = [0f32; 3];
        for coord in position.iter_mut() {
            *coord = numbers
                .next()
                .with_context(|| format!("vertex data ends short at vertex {}", i))?
                .parse()
                .with_context(|| format!("vertex {} has a non-numeric coordinate", i))?;
        }
        vertices.push(Vertex { position });
    }
    Ok(Mesh::new(vertices))
}
