//! Equatorial ↔ Horizontal conversion.
//!
//! Hour-angle based: H = LST − RA. Azimuth is measured from north through
//! east. Intermediate sine arguments are clamped before `asin` to absorb
//! round-off at the celestial poles.

use radix_time::wrap_rad;

use crate::{clamp_unit, Equatorial, Horizontal};

/// Equatorial to horizontal coordinates for an observer at geodetic
/// `latitude` (radians) and local sidereal time `lst` (radians).
pub fn equatorial_to_horizontal(eq: Equatorial, latitude: f64, lst: f64) -> Horizontal {
    let h = lst - eq.ra;
    let (sin_h, cos_h) = h.sin_cos();
    let (sin_phi, cos_phi) = latitude.sin_cos();
    let (sin_d, cos_d) = eq.dec.sin_cos();

    let alt = clamp_unit(sin_phi * sin_d + cos_phi * cos_d * cos_h).asin();
    let az = wrap_rad((-cos_d * sin_h).atan2(sin_d * cos_phi - cos_d * sin_phi * cos_h));

    Horizontal { az, alt }
}

/// Horizontal to equatorial coordinates, the inverse of
/// [`equatorial_to_horizontal`] for the same latitude and LST.
pub fn horizontal_to_equatorial(hor: Horizontal, latitude: f64, lst: f64) -> Equatorial {
    let (sin_az, cos_az) = hor.az.sin_cos();
    let (sin_phi, cos_phi) = latitude.sin_cos();
    let (sin_a, cos_a) = hor.alt.sin_cos();

    let dec = clamp_unit(sin_phi * sin_a + cos_phi * cos_a * cos_az).asin();
    let h = (-cos_a * sin_az).atan2(sin_a * cos_phi - cos_a * sin_phi * cos_az);
    let ra = wrap_rad(lst - h);

    Equatorial { ra, dec }
}
