//! Canonical angle-wrapping helpers.
//!
//! Every module in the workspace that wraps an angle does it through these
//! functions, so the wrap convention ([0, 2π) / [0, 360°), signed differences
//! in (−180°, 180°]) is defined in exactly one place.

use std::f64::consts::TAU;

/// Wrap radians into [0, 2π).
pub fn wrap_rad(x: f64) -> f64 {
    x.rem_euclid(TAU)
}

/// Wrap degrees into [0, 360).
pub fn normalize_deg(x: f64) -> f64 {
    x.rem_euclid(360.0)
}

/// Signed shortest arc from `a` to `b` in degrees, in (−180, 180].
pub fn angular_diff_deg(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Minimal circular separation of two longitudes in degrees, in [0, 180].
pub fn min_circular_distance_deg(a: f64, b: f64) -> f64 {
    angular_diff_deg(a, b).abs()
}
