//! Scene graph construction and hierarchy.
//!
//! A [`Scene`] is built once from a parsed description tree and is immutable
//! afterwards: a forest of [`SceneNode`]s, each owning an ordered transform
//! list, ordered model references and ordered children, plus the
//! [`ModelStore`] that all model references resolve through. Geometry is
//! loaded and uploaded while the tree is built; a frame only replays
//! transforms and issues draws.

use std::rc::Rc;

use anyhow::Context;
use cgmath::Vector3;
use log::debug;

use crate::{
    context::RenderBackend,
    data_structures::{
        description::{Element, WorldSettings},
        model::Model,
        transform::Transform,
    },
    resources::ModelStore,
};

/// One model reference inside a node: the shared cached model plus an
/// optional local offset that applies to this reference only, never to
/// siblings or children.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    pub model: Rc<Model>,
    pub offset: Option<Vector3<f32>>,
}

/// One level of the scene hierarchy. Owns its children exclusively: the
/// graph is a tree, never a cycle.
#[derive(Debug, Default)]
pub struct SceneNode {
    pub transforms: Vec<Transform>,
    pub models: Vec<ModelInstance>,
    pub children: Vec<SceneNode>,
}

/// A built scene: world settings, the root forest and the model cache the
/// nodes share.
#[derive(Debug)]
pub struct Scene {
    pub settings: WorldSettings,
    pub roots: Vec<SceneNode>,
    pub store: ModelStore,
}

impl Scene {
    /// Builds a scene from a parsed `world` element.
    ///
    /// Every `group` child becomes a root node; geometry is resolved through
    /// the store (and uploaded through the backend) as model references are
    /// encountered. Any missing file, malformed geometry source or invalid
    /// animated transform aborts the build; no partial scene is returned.
    pub fn build(
        world: &Element,
        mut store: ModelStore,
        backend: &mut dyn RenderBackend,
    ) -> anyhow::Result<Self> {
        let settings = WorldSettings::from_world(world);
        let mut roots = Vec::new();
        for group in world.children_named("group") {
            roots.push(build_node(group, &mut store, backend)?);
        }
        Ok(Self {
            settings,
            roots,
            store,
        })
    }
}

/// Recursively interprets one `group` element.
///
/// Transform children are consumed strictly in document order regardless of
/// kind; static and animated flavors may interleave and replay in exactly
/// this order. Unknown elements are skipped for forward compatibility.
fn build_node(
    group: &Element,
    store: &mut ModelStore,
    backend: &mut dyn RenderBackend,
) -> anyhow::Result<SceneNode> {
    let mut node = SceneNode::default();

    if let Some(transform) = group.child("transform") {
        for child in &transform.children {
            if let Some(transform) = parse_transform(child)? {
                node.transforms.push(transform);
            }
        }
    }

    if let Some(models) = group.child("models") {
        for model in models.children_named("model") {
            let Some(file) = model.attribute("file") else {
                debug!("skipping <model> without a file attribute");
                continue;
            };
            let loaded = store
                .load(file, backend)
                .context("resolving scene model reference")?;
            // A nested translate offsets this one reference only.
            let offset = model.child("translate").map(|t| t.xyz(0.0));
            node.models.push(ModelInstance {
                model: loaded,
                offset,
            });
        }
    }

    for child in group.children_named("group") {
        node.children.push(build_node(child, store, backend)?);
    }

    Ok(node)
}

/// Maps one `transform` child element to a [`Transform`], or `None` for
/// unknown elements.
///
/// A `time` attribute on `translate`/`rotate` is the single signal that
/// selects the animated variant; without it the element is static.
fn parse_transform(element: &Element) -> anyhow::Result<Option<Transform>> {
    let transform = match element.name.as_str() {
        "translate" if element.attribute("time").is_some() => Transform::PathTranslate {
            points: element
                .children_named("point")
                .map(|point| point.xyz(0.0))
                .collect(),
            period: element.attribute_f32("time", 0.0),
            align: element.attribute_bool("align", false),
        },
        "translate" => Transform::Translate {
            offset: element.xyz(0.0),
        },
        "rotate" if element.attribute("time").is_some() => Transform::TimedRotate {
            axis: element.xyz(0.0),
            period: element.attribute_f32("time", 0.0),
        },
        "rotate" => Transform::Rotate {
            angle: element.attribute_f32("angle", 0.0),
            axis: element.xyz(0.0),
        },
        "scale" => Transform::Scale {
            factors: element.xyz(1.0),
        },
        other => {
            debug!("ignoring unknown transform element <{}>", other);
            return Ok(None);
        }
    };
    transform.validate()?;
    Ok(Some(transform))
}
