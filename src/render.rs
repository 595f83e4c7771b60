//! Scene rendering: depth-first traversal with a transform-stack discipline.
//!
//! Each frame walks the tree once. Entering a node saves the backend's
//! current matrix, replays the node's transform list in document order
//! (resolving animated entries against the supplied time), draws each model
//! reference inside a further nested save/restore so a reference's local
//! offset never leaks to siblings or children, recurses, and restores the
//! parent's matrix on the way out. No geometry is generated or re-tessellated
//! here; draws only bind cached buffers.

use crate::{
    animation,
    context::RenderBackend,
    data_structures::{
        scene_graph::{Scene, SceneNode},
        transform::Transform,
    },
};

/// Draws all root nodes of a scene against the given elapsed time.
pub fn draw_scene(scene: &Scene, time: f32, backend: &mut dyn RenderBackend) {
    for root in &scene.roots {
        draw_node(root, time, backend);
    }
}

/// Draws one node and its subtree.
pub fn draw_node(node: &SceneNode, time: f32, backend: &mut dyn RenderBackend) {
    backend.push_matrix();
    for transform in &node.transforms {
        apply_transform(transform, time, backend);
    }
    for reference in &node.models {
        backend.push_matrix();
        if let Some(offset) = reference.offset {
            backend.translate(offset);
        }
        backend.draw(reference.model.handle, reference.model.vertex_count());
        backend.pop_matrix();
    }
    for child in &node.children {
        draw_node(child, time, backend);
    }
    backend.pop_matrix();
}

/// Resolves one transform against the current time and applies it to the
/// backend's matrix stack.
pub fn apply_transform(transform: &Transform, time: f32, backend: &mut dyn RenderBackend) {
    match transform {
        Transform::Translate { offset } => backend.translate(*offset),
        Transform::Rotate { angle, axis } => backend.rotate(*angle, *axis),
        Transform::Scale { factors } => backend.scale(*factors),
        Transform::PathTranslate {
            points,
            period,
            align,
        } => {
            let (position, tangent) = animation::path_state(points, time, *period);
            backend.translate(position);
            if *align {
                backend.mult_matrix(animation::alignment_matrix(tangent));
            }
        }
        Transform::TimedRotate { axis, period } => {
            backend.rotate(animation::timed_angle(time, *period), *axis);
        }
    }
}
