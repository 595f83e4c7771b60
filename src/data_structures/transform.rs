//! The transform sum type applied by scene nodes.
//!
//! A node carries an ordered list of transforms which is replayed exactly as
//! listed when the node is drawn. The list order is the authoritative
//! composition order; transforms are never reordered by kind. Static and
//! animated variants may interleave arbitrarily.

use anyhow::bail;
use cgmath::Vector3;

/// One transform entry of a scene node.
///
/// The static variants are fixed at build time. `PathTranslate` and
/// `TimedRotate` are time-driven: they are resolved to a concrete pose from
/// the elapsed time, fresh on every frame, so the animation state never
/// accumulates and any point in time can be replayed.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Translation by a fixed offset.
    Translate { offset: Vector3<f32> },
    /// Rotation of `angle` degrees about `axis`.
    Rotate { angle: f32, axis: Vector3<f32> },
    /// Non-uniform scale.
    Scale { factors: Vector3<f32> },
    /// Translation along a closed Catmull-Rom loop through `points`, one full
    /// cycle per `period` seconds. With `align` set the geometry is also
    /// rotated into the curve's tangent frame.
    PathTranslate {
        points: Vec<Vector3<f32>>,
        period: f32,
        align: bool,
    },
    /// Constant-rate rotation about `axis`, one full turn per `period`
    /// seconds, free-running.
    TimedRotate { axis: Vector3<f32>, period: f32 },
}

impl Transform {
    /// Build-time configuration check: a closed path needs a four-point
    /// Catmull-Rom window and animated transforms need a positive period.
    pub fn validate(&self) -> anyhow::Result<()> {
        match self {
            Transform::PathTranslate { points, period, .. } => {
                if points.len() < 4 {
                    bail!(
                        "path animation needs at least 4 control points, got {}",
                        points.len()
                    );
                }
                if *period <= 0.0 {
                    bail!("path animation needs a positive period, got {}", period);
                }
            }
            Transform::TimedRotate { period, .. } => {
                if *period <= 0.0 {
                    bail!("timed rotation needs a positive period, got {}", period);
                }
            }
            Transform::Translate { .. } | Transform::Rotate { .. } | Transform::Scale { .. } => {}
        }
        Ok(())
    }

    /// Whether resolving this transform depends on the current time.
    pub fn is_animated(&self) -> bool {
        matches!(
            self,
            Transform::PathTranslate { .. } | Transform::TimedRotate { .. }
        )
    }
}
