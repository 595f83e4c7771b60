//! Time-driven transform math: Catmull-Rom splines, closed-loop path
//! animation and periodic rotation.
//!
//! Everything here is a pure function of an externally supplied elapsed-time
//! value. No animation state persists between frames: a pose is recomputed
//! fresh from the time every frame, which keeps animation deterministic,
//! drift-free and seekable to any point in time. [`FrameClock`] is the one
//! place that touches a real clock; hosts that want reproducible output can
//! feed any time value instead.

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};
use instant::Instant;

/// Evaluates the Catmull-Rom segment through `p1`..`p2` (with `p0`/`p3` as
/// outer window points) at local parameter `t` in `[0, 1]`.
///
/// Returns the position and the analytic first derivative. At `t = 0` the
/// position is exactly `p1`, at `t = 1` exactly `p2`.
pub fn catmull_rom(
    p0: Vector3<f32>,
    p1: Vector3<f32>,
    p2: Vector3<f32>,
    p3: Vector3<f32>,
    t: f32,
) -> (Vector3<f32>, Vector3<f32>) {
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = -0.5 * t3 + t2 - 0.5 * t;
    let c1 = 1.5 * t3 - 2.5 * t2 + 1.0;
    let c2 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
    let c3 = 0.5 * t3 - 0.5 * t2;
    let position = p0 * c0 + p1 * c1 + p2 * c2 + p3 * c3;

    let d0 = -1.5 * t2 + 2.0 * t - 0.5;
    let d1 = 4.5 * t2 - 5.0 * t;
    let d2 = -4.5 * t2 + 4.0 * t + 0.5;
    let d3 = 1.5 * t2 - t;
    let derivative = p0 * d0 + p1 * d1 + p2 * d2 + p3 * d3;

    (position, derivative)
}

/// Position and tangent on a closed Catmull-Rom loop through `points` at the
/// given `time`, one full cycle per `period` seconds.
///
/// The path wraps: the global parameter `u = (time mod period) / period`
/// covers all N segments of the loop and the four-point window is indexed
/// modulo N, so the position at the end of a cycle meets the position at its
/// start.
///
/// Needs at least 4 points and a positive period; both are checked when the
/// transform is built, see [`crate::data_structures::transform::Transform::validate`].
pub fn path_state(points: &[Vector3<f32>], time: f32, period: f32) -> (Vector3<f32>, Vector3<f32>) {
    let n = points.len();
    let u = time.rem_euclid(period) / period;
    let g = u * n as f32;
    // Float rounding can land g on exactly n; the modulo folds that onto the
    // first segment, which is where the loop continues anyway.
    let segment = (g.floor() as usize) % n;
    let t = g - g.floor();

    let point = |offset: isize| {
        let index = (segment as isize + offset).rem_euclid(n as isize);
        points[index as usize]
    };
    catmull_rom(point(-1), point(0), point(1), point(2), t)
}

/// Rotation that aligns geometry to a path tangent.
///
/// Builds an orthonormal frame from the normalized tangent, the world up
/// vector as auxiliary axis, `side = tangent x up`, and the corrected
/// `up' = side x tangent`. Using the corrected up instead of the raw world up
/// keeps the frame orthonormal and avoids roll drift. Columns are
/// `[side, up', tangent]`.
///
/// A degenerate tangent (zero, or parallel to world up) yields the identity:
/// no alignment this frame rather than a collapsed matrix.
pub fn alignment_matrix(tangent: Vector3<f32>) -> Matrix4<f32> {
    if tangent.magnitude2() < f32::EPSILON {
        return Matrix4::identity();
    }
    let tangent = tangent.normalize();
    let side = tangent.cross(Vector3::unit_y());
    if side.magnitude2() < f32::EPSILON {
        return Matrix4::identity();
    }
    let side = side.normalize();
    let up = side.cross(tangent);
    Matrix4::from_cols(
        side.extend(0.0),
        up.extend(0.0),
        tangent.extend(0.0),
        Vector4::unit_w(),
    )
}

/// Free-running rotation angle in degrees: 0 at a period boundary, growing
/// to 360 over one period, then wrapping.
pub fn timed_angle(time: f32, period: f32) -> f32 {
    time.rem_euclid(period) / period * 360.0
}

/// Monotonic elapsed-seconds source for hosts driving a render loop.
///
/// The evaluator itself never reads a clock; frames are rendered against the
/// time value the host passes in.
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
