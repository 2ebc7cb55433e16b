//! Named constants shared by the circle type and the word problems.

/// Full turn in radians; a circle's circumference is `TAU * radius`.
pub use std::f64::consts::TAU;

/// Length added to the rope in the rope-gap puzzle.
pub const ROPE_EXTENSION: f64 = 1.0;
/// WGS-84 equatorial radius of the Earth in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
