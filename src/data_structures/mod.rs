//! Engine data structures: the scene-graph data model.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains vertex, mesh and cached-model definitions
//! - `transform` is the static/animated transform sum type
//! - `description` is the parsed attribute tree an external parser produces
//! - `scene_graph` holds the node hierarchy and the scene builder

pub mod description;
pub mod model;
pub mod scene_graph;
pub mod transform;
