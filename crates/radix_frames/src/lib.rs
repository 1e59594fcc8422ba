//! Coordinate frames and the conversions between them.
//!
//! This crate provides:
//! - Ecliptic ↔ Equatorial (mean obliquity of date)
//! - Equatorial ↔ Horizontal (hour-angle based, observer latitude + LST)
//! - Equatorial ↔ Galactic (fixed J2000 rotation matrix)
//! - A generic pole-shift rotation between frames whose poles differ by a
//!   single tilt angle
//!
//! All angles are radians. Longitudes, right ascensions, and azimuths are
//! wrapped to [0, 2π); latitudes, declinations, and altitudes lie in
//! [−π/2, π/2].

pub mod ecliptic;
pub mod galactic;
pub mod horizontal;
pub mod pole_shift;

pub use ecliptic::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use galactic::{equatorial_to_galactic, galactic_to_equatorial};
pub use horizontal::{equatorial_to_horizontal, horizontal_to_equatorial};
pub use pole_shift::pole_shift;

use serde::{Deserialize, Serialize};

/// Ecliptic coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    /// Ecliptic longitude, [0, 2π).
    pub lon: f64,
    /// Ecliptic latitude, [−π/2, π/2].
    pub lat: f64,
}

/// Equatorial coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension, [0, 2π).
    pub ra: f64,
    /// Declination, [−π/2, π/2].
    pub dec: f64,
}

/// Horizontal (alt-azimuth) coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth measured from north through east, [0, 2π).
    pub az: f64,
    /// Altitude above the horizon, [−π/2, π/2].
    pub alt: f64,
}

/// Galactic coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Galactic {
    /// Galactic longitude l, [0, 2π).
    pub lon: f64,
    /// Galactic latitude b, [−π/2, π/2].
    pub lat: f64,
}

/// Clamp a sine/cosine argument into [−1, 1] before `asin`/`acos`.
///
/// Absorbs floating round-off near the poles where the spherical identities
/// can drift a few ulps outside the valid domain.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
