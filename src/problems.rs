//! Closed-form solutions to two classic circle word problems.
//!
//! * The rope gap: a rope hugging a circle is lengthened and lifted evenly
//!   off the surface. How high does it float?
//! * The pool cost: a round pool gets a concrete walkway of fixed width,
//!   fenced along its outer edge. What does the job cost?

use std::f64::consts::PI;

use log::debug;

use crate::constants::{ROPE_EXTENSION, TAU};
use crate::error::{check_non_negative, GeometryError, Quantity};

/// Gap between a circle of `radius` and a rope around it lengthened by
/// [`ROPE_EXTENSION`].
///
/// The result is `1 / TAU` whatever the radius: the added circumference
/// maps linearly onto added radius. Any real radius is accepted, including
/// negative values.
///
/// # Examples
/// ```
/// use circle_tasks::{rope_gap, EARTH_RADIUS_M};
///
/// let gap = rope_gap(EARTH_RADIUS_M);
/// assert!((gap - 1.0 / std::f64::consts::TAU).abs() < 1e-6);
/// ```
#[must_use]
pub fn rope_gap(radius: f64) -> f64 {
    rope_gap_for_extension(radius, ROPE_EXTENSION)
}

/// Gap produced by lengthening the rope around a circle of `radius` by
/// `extension`.
///
/// The radius does not enter the result; it is accepted so call sites read
/// like the puzzle they solve.
#[expect(
    unused_variables,
    reason = "The gap is independent of the radius it is lifted off."
)]
#[must_use]
pub fn rope_gap_for_extension(radius: f64, extension: f64) -> f64 {
    extension / TAU
}

/// Cost breakdown for a round pool with a fenced walkway around it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoolEstimate {
    /// Area of the annular walkway.
    pub walkway_area: f64,
    /// Length of fence along the walkway's outer edge.
    pub fence_length: f64,
    /// `walkway_area` priced at the walkway rate.
    pub walkway_cost: f64,
    /// `fence_length` priced at the fence rate.
    pub fence_cost: f64,
    /// Sum of both costs.
    pub total: f64,
}

/// Prices the walkway and fence around a pool, rejecting invalid input.
///
/// The walkway is the ring between `pool_radius` and
/// `pool_radius + walkway_width`; `walkway_rate` is charged per unit of its
/// area and `fence_rate` per unit length of its outer edge. Zero widths and
/// rates are valid.
///
/// # Errors
/// Returns [`GeometryError`] for the first argument that is negative or NaN.
pub fn try_pool_estimate(
    pool_radius: f64,
    walkway_width: f64,
    walkway_rate: f64,
    fence_rate: f64,
) -> Result<PoolEstimate, GeometryError> {
    let inner = check_non_negative(Quantity::PoolRadius, pool_radius)?;
    let width = check_non_negative(Quantity::WalkwayWidth, walkway_width)?;
    let area_rate = check_non_negative(Quantity::WalkwayRate, walkway_rate)?;
    let length_rate = check_non_negative(Quantity::FenceRate, fence_rate)?;

    let outer = inner + width;
    // Factored form of PI * (outer² - inner²); the squares overflow for huge radii.
    let walkway_area = PI * width * (2.0 * inner + width);
    let fence_length = TAU * outer;
    let walkway_cost = walkway_area * area_rate;
    let fence_cost = fence_length * length_rate;
    Ok(PoolEstimate {
        walkway_area,
        fence_length,
        walkway_cost,
        fence_cost,
        total: walkway_cost + fence_cost,
    })
}

/// Prices the walkway and fence around a pool.
///
/// Any negative (or NaN) argument yields the all-zero estimate.
#[must_use]
pub fn pool_estimate(
    pool_radius: f64,
    walkway_width: f64,
    walkway_rate: f64,
    fence_rate: f64,
) -> PoolEstimate {
    try_pool_estimate(pool_radius, walkway_width, walkway_rate, fence_rate).unwrap_or_else(|err| {
        debug!("pool estimate clamped to zero: {err}");
        PoolEstimate::default()
    })
}

/// Total cost of the walkway and fence around a pool.
///
/// Returns exactly `0.0` when any argument is negative, regardless of the
/// others.
///
/// # Examples
/// ```
/// use circle_tasks::pool_cost;
/// use std::f64::consts::PI;
///
/// let cost = pool_cost(3.0, 1.0, 100.0, 50.0);
/// let expected = PI * (16.0 - 9.0) * 100.0 + 8.0 * PI * 50.0;
/// assert!((cost - expected).abs() < 1e-6);
/// assert_eq!(pool_cost(3.0, -1.0, 100.0, 50.0), 0.0);
/// ```
#[must_use]
pub fn pool_cost(pool_radius: f64, walkway_width: f64, walkway_rate: f64, fence_rate: f64) -> f64 {
    pool_estimate(pool_radius, walkway_width, walkway_rate, fence_rate).total
}
