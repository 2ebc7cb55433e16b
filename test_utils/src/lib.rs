//! Utility helpers for tests.
//! Shared tolerances plus closed-form references computed independently of
//! the crate under test.

use std::f64::consts::PI;

use circle_tasks::Circle;

/// Absolute tolerance used for ordinary floating-point comparisons.
pub const EPSILON: f64 = 1e-6;

/// Expected circumference for `radius`.
pub fn expected_ference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Expected area for `radius`.
pub fn expected_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Expected rope gap for a one-unit extension.
pub fn expected_gap() -> f64 {
    1.0 / (2.0 * PI)
}

/// Walkway area plus fence length, each priced at its own rate.
pub fn expected_pool_cost(
    pool_radius: f64,
    walkway_width: f64,
    walkway_rate: f64,
    fence_rate: f64,
) -> f64 {
    let outer = pool_radius + walkway_width;
    PI * (outer * outer - pool_radius * pool_radius) * walkway_rate
        + 2.0 * PI * outer * fence_rate
}

/// Assert that every field of `circle` matches the closed forms for `radius`.
///
/// # Panics
/// Panics naming the first field outside `tolerance`.
pub fn assert_circle_matches(circle: &Circle, radius: f64, tolerance: f64) {
    approx::assert_abs_diff_eq!(circle.radius(), radius, epsilon = tolerance);
    approx::assert_abs_diff_eq!(circle.ference(), expected_ference(radius), epsilon = tolerance);
    approx::assert_abs_diff_eq!(circle.area(), expected_area(radius), epsilon = tolerance);
}

/// Assert that `circle` has collapsed to zero in every field.
///
/// # Panics
/// Panics if any field is non-zero.
pub fn assert_zero_circle(circle: &Circle) {
    assert_eq!(
        (circle.radius(), circle.ference(), circle.area()),
        (0.0, 0.0, 0.0),
        "expected the zero circle, got {circle:?}"
    );
}
