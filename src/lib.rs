//! Circle geometry helpers.
//!
//! [`Circle`] keeps radius, circumference and area in step with each other,
//! while [`rope_gap`] and [`pool_cost`] solve two classic word problems in
//! closed form. Invalid numeric input is clamped to zero throughout; the
//! `try_*` functions report it as a [`GeometryError`] instead.
pub mod circle;
pub mod constants;
pub mod error;
pub mod logging;
pub mod problems;
pub use constants::*;

pub use circle::Circle;
pub use error::{GeometryError, Quantity};
pub use logging::init as init_logging;
pub use problems::{
    pool_cost, pool_estimate, rope_gap, rope_gap_for_extension, try_pool_estimate, PoolEstimate,
};
