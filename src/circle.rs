//! A circle whose radius, circumference and area stay mutually consistent.
//!
//! Setting any one of the three quantities recomputes the other two. Invalid
//! input (negative or NaN) collapses the whole circle to zero rather than
//! failing; the `try_*` methods offer a checked alternative that reports the
//! rejected value and leaves the circle unchanged.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::TAU;
use crate::error::{check_non_negative, GeometryError, Quantity};

/// Circle described by its radius, circumference ("ference") and area.
///
/// Every reachable value satisfies `radius >= 0`, `ference >= 0` and
/// `area >= 0`. After any successful update `ference == TAU * radius` and
/// `area == PI * radius²` up to floating-point rounding.
///
/// # Examples
/// ```
/// use circle_tasks::Circle;
///
/// let mut circle = Circle::new(5.5);
/// assert!((circle.ference() - 34.557_519).abs() < 1e-6);
///
/// circle.set_area(-1.0);
/// assert_eq!(circle, Circle::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CircleRecord")]
pub struct Circle {
    radius: f64,
    ference: f64,
    area: f64,
}

/// Wire shape accepted when deserialising; only the radius is trusted.
#[derive(Deserialize)]
struct CircleRecord {
    radius: f64,
}

impl From<CircleRecord> for Circle {
    fn from(record: CircleRecord) -> Self {
        Self::new(record.radius)
    }
}

impl Circle {
    /// Builds a circle from its radius.
    ///
    /// A negative or NaN radius yields the zero circle.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        let mut circle = Self::default();
        circle.set_radius(radius);
        circle
    }

    /// Builds a circle from its circumference, clamping invalid input to zero.
    #[must_use]
    pub fn from_ference(ference: f64) -> Self {
        let mut circle = Self::default();
        circle.set_ference(ference);
        circle
    }

    /// Builds a circle from its area, clamping invalid input to zero.
    #[must_use]
    pub fn from_area(area: f64) -> Self {
        let mut circle = Self::default();
        circle.set_area(area);
        circle
    }

    /// Builds a circle from its radius, rejecting invalid input.
    ///
    /// # Errors
    /// Returns [`GeometryError`] when `radius` is negative or NaN.
    pub fn try_new(radius: f64) -> Result<Self, GeometryError> {
        check_non_negative(Quantity::Radius, radius).map(Self::with_radius)
    }

    /// Radius of the circle.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Circumference of the circle.
    #[must_use]
    pub const fn ference(&self) -> f64 {
        self.ference
    }

    /// Area of the circle.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Sets the radius and recomputes circumference and area.
    ///
    /// A negative or NaN radius resets all three fields to zero.
    pub fn set_radius(&mut self, radius: f64) {
        if let Err(err) = self.try_set_radius(radius) {
            self.collapse(&err);
        }
    }

    /// Sets the circumference and derives radius and area from it.
    ///
    /// A negative or NaN circumference resets all three fields to zero,
    /// including a radius that was previously valid.
    pub fn set_ference(&mut self, ference: f64) {
        if let Err(err) = self.try_set_ference(ference) {
            self.collapse(&err);
        }
    }

    /// Sets the area and derives radius and circumference from it.
    ///
    /// A negative or NaN area resets all three fields to zero.
    pub fn set_area(&mut self, area: f64) {
        if let Err(err) = self.try_set_area(area) {
            self.collapse(&err);
        }
    }

    /// Checked form of [`Circle::set_radius`].
    ///
    /// # Errors
    /// Returns [`GeometryError`] when `radius` is negative or NaN; the circle
    /// is left unchanged.
    pub fn try_set_radius(&mut self, radius: f64) -> Result<(), GeometryError> {
        let valid = check_non_negative(Quantity::Radius, radius)?;
        *self = Self::with_radius(valid);
        Ok(())
    }

    /// Checked form of [`Circle::set_ference`].
    ///
    /// # Errors
    /// Returns [`GeometryError`] when `ference` is negative or NaN; the circle
    /// is left unchanged.
    pub fn try_set_ference(&mut self, ference: f64) -> Result<(), GeometryError> {
        let valid = check_non_negative(Quantity::Ference, ference)?;
        let radius = valid / TAU;
        *self = Self {
            radius,
            ference: valid,
            area: PI * radius * radius,
        };
        Ok(())
    }

    /// Checked form of [`Circle::set_area`].
    ///
    /// # Errors
    /// Returns [`GeometryError`] when `area` is negative or NaN; the circle is
    /// left unchanged.
    pub fn try_set_area(&mut self, area: f64) -> Result<(), GeometryError> {
        let valid = check_non_negative(Quantity::Area, area)?;
        let radius = (valid / PI).sqrt();
        *self = Self {
            radius,
            ference: TAU * radius,
            area: valid,
        };
        Ok(())
    }

    fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ference: TAU * radius,
            area: PI * radius * radius,
        }
    }

    fn collapse(&mut self, err: &GeometryError) {
        debug!("circle reset to zero: {err}");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn try_set_leaves_circle_untouched_on_error() {
        let mut circle = Circle::new(2.0);
        let err = circle.try_set_ference(-1.0).unwrap_err();
        assert_eq!(err.quantity(), Quantity::Ference);
        assert_eq!(circle, Circle::new(2.0));
    }

    #[test]
    fn nan_radius_collapses_to_zero() {
        let circle = Circle::new(f64::NAN);
        assert_eq!(circle, Circle::default());
    }

    #[test]
    fn set_ference_keeps_given_value() {
        let mut circle = Circle::default();
        circle.set_ference(10.0);
        assert_eq!(circle.ference(), 10.0);
        assert_abs_diff_eq!(circle.radius(), 10.0 / TAU, epsilon = 1e-12);
    }
}
