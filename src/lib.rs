//! orrery
//!
//! A lightweight scene-graph engine. A scene is a hierarchy of transformed
//! groups, each optionally referencing procedurally generated or file-backed
//! geometry, with static transforms and continuous, time-driven animated
//! transforms that move geometry along a closed Catmull-Rom curve. The crate
//! owns the scene-graph data model, the spline/animation math and the
//! procedural mesh generators (including bicubic Bezier patch tessellation);
//! windowing, camera control, description-text parsing and the actual device
//! draw call belong to the embedding application.
//!
//! High-level modules
//! - `animation`: Catmull-Rom evaluation, path/rotation animation, frame clock
//! - `context`: the render-backend boundary and the software matrix stack
//! - `data_structures`: scene data models (meshes, transforms, scene graph)
//! - `render`: depth-first scene traversal and draw submission
//! - `resources`: model cache, primitive generators and Bezier tessellation
//!

pub mod animation;
pub mod context;
pub mod data_structures;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
