//! Ecliptic ↔ Equatorial conversion for a given obliquity.
//!
//! Source: Meeus, Astronomical Algorithms, ch. 13.

use radix_time::wrap_rad;

use crate::{clamp_unit, Ecliptic, Equatorial};

/// Ecliptic to equatorial coordinates for obliquity `eps` (radians).
///
/// The longitude branch uses the tan-latitude form, which is undefined at
/// |lat| = π/2 (the ecliptic poles). Chart bodies never reach ecliptic
/// latitude ±90°, so the singularity is accepted rather than special-cased.
pub fn ecliptic_to_equatorial(ecl: Ecliptic, eps: f64) -> Equatorial {
    let (sin_e, cos_e) = eps.sin_cos();
    let (sin_b, cos_b) = ecl.lat.sin_cos();
    let (sin_l, cos_l) = ecl.lon.sin_cos();

    let y = sin_l * cos_e - (sin_b / cos_b) * sin_e;
    let ra = wrap_rad((y * cos_b).atan2(cos_l * cos_b));
    let dec = clamp_unit(sin_b * cos_e + cos_b * sin_e * sin_l).asin();

    Equatorial { ra, dec }
}

/// Equatorial to ecliptic coordinates for obliquity `eps` (radians).
///
/// Exact inverse of [`ecliptic_to_equatorial`] away from the ecliptic poles.
pub fn equatorial_to_ecliptic(eq: Equatorial, eps: f64) -> Ecliptic {
    let (sin_e, cos_e) = eps.sin_cos();
    let (sin_d, cos_d) = eq.dec.sin_cos();
    let (sin_a, cos_a) = eq.ra.sin_cos();

    let lon = wrap_rad((sin_a * cos_e + (sin_d / cos_d) * sin_e).atan2(cos_a));
    let lat = clamp_unit(sin_d * cos_e - cos_d * sin_e * sin_a).asin();

    Ecliptic { lon, lat }
}
