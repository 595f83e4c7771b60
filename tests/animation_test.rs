use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3};
use orrery::animation::{FrameClock, alignment_matrix, catmull_rom, path_state, timed_angle};

mod common;

use common::test_utils::{assert_close, assert_matrix_close, assert_vec3_close, init_logging};

fn square_points() -> Vec<Vector3<f32>> {
    common::test_utils::square_path()
        .iter()
        .map(|&[x, y, z]| Vector3::new(x, y, z))
        .collect()
}

#[test]
fn should_interpolate_window_endpoints() {
    init_logging();
    let p0 = Vector3::new(-3.0, 2.0, 1.0);
    let p1 = Vector3::new(0.5, -1.0, 4.0);
    let p2 = Vector3::new(2.0, 2.0, -2.5);
    let p3 = Vector3::new(5.0, 0.0, 0.0);

    let (start, _) = catmull_rom(p0, p1, p2, p3, 0.0);
    assert_vec3_close(start, p1);
    let (end, _) = catmull_rom(p0, p1, p2, p3, 1.0);
    assert_vec3_close(end, p2);
}

#[test]
fn should_match_derivative_with_finite_differences() {
    init_logging();
    let p0 = Vector3::new(0.0, 0.0, 0.0);
    let p1 = Vector3::new(1.0, 2.0, 0.0);
    let p2 = Vector3::new(3.0, 1.0, -1.0);
    let p3 = Vector3::new(4.0, 0.0, 2.0);

    let h = 1e-3;
    for t in [0.1, 0.35, 0.5, 0.75, 0.9] {
        let (_, derivative) = catmull_rom(p0, p1, p2, p3, t);
        let (ahead, _) = catmull_rom(p0, p1, p2, p3, t + h);
        let (behind, _) = catmull_rom(p0, p1, p2, p3, t - h);
        let estimate = (ahead - behind) / (2.0 * h);
        assert!(
            (derivative - estimate).magnitude() < 1e-2,
            "analytic derivative {:?} disagrees with estimate {:?} at t={}",
            derivative,
            estimate,
            t
        );
    }
}

#[test]
fn should_pass_through_every_control_point() {
    init_logging();
    let points = square_points();
    let period = 8.0;
    // The global parameter hits control point k at time k * period / N.
    for (k, expected) in points.iter().enumerate() {
        let (position, _) = path_state(&points, k as f32 * period / points.len() as f32, period);
        assert_vec3_close(position, *expected);
    }
}

#[test]
fn should_close_the_loop() {
    init_logging();
    let points = square_points();
    let period = 5.0;
    let (start, _) = path_state(&points, 0.0, period);
    let (almost_end, _) = path_state(&points, period - 1e-4, period);
    assert!(
        (almost_end - start).magnitude() < 1e-2,
        "loop does not close: {:?} vs {:?}",
        almost_end,
        start
    );
    // One full period later the position repeats exactly.
    let (next_cycle, _) = path_state(&points, period + 0.7, period);
    let (this_cycle, _) = path_state(&points, 0.7, period);
    assert_vec3_close(next_cycle, this_cycle);
}

#[test]
fn should_wrap_timed_angle_at_period_boundaries() {
    init_logging();
    let period = 5.0;
    assert_close(timed_angle(0.0, period), 0.0);
    assert_close(timed_angle(period / 2.0, period), 180.0);
    assert!(timed_angle(period - 1e-3, period) > 359.0);
    assert_close(timed_angle(period, period), 0.0);
    assert_close(timed_angle(period * 2.5, period), 180.0);
}

#[test]
fn should_build_orthonormal_alignment_frame() {
    init_logging();
    // The tangent does not need to be normalized.
    let matrix = alignment_matrix(Vector3::new(0.0, 0.0, 2.0));
    assert_vec3_close(matrix.x.truncate(), Vector3::new(-1.0, 0.0, 0.0));
    assert_vec3_close(matrix.y.truncate(), Vector3::new(0.0, 1.0, 0.0));
    assert_vec3_close(matrix.z.truncate(), Vector3::new(0.0, 0.0, 1.0));

    // Generic direction: columns stay unit length and orthogonal, the third
    // column is the normalized tangent.
    let tangent = Vector3::new(1.0, 0.4, -2.0);
    let matrix = alignment_matrix(tangent);
    let (x, y, z) = (matrix.x.truncate(), matrix.y.truncate(), matrix.z.truncate());
    assert_vec3_close(z, tangent.normalize());
    assert_close(x.magnitude(), 1.0);
    assert_close(y.magnitude(), 1.0);
    assert_close(x.dot(y), 0.0);
    assert_close(x.dot(z), 0.0);
    assert_close(y.dot(z), 0.0);
}

#[test]
fn should_fall_back_to_identity_for_degenerate_tangents() {
    init_logging();
    assert_matrix_close(alignment_matrix(Vector3::new(0.0, 0.0, 0.0)), Matrix4::identity());
    // Tangent parallel to world up has no stable side vector.
    assert_matrix_close(alignment_matrix(Vector3::unit_y()), Matrix4::identity());
}

#[test]
fn should_report_monotonic_elapsed_time() {
    init_logging();
    let clock = FrameClock::new();
    let first = clock.elapsed_seconds();
    let second = clock.elapsed_seconds();
    assert!(first >= 0.0);
    assert!(second >= first);
}
