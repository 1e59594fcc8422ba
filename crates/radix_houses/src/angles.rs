//! Ascendant, Midheaven, and the ecliptic/equator projection helpers shared
//! by the cusp formulas.

use radix_time::wrap_rad;

/// Ascendant and Midheaven ecliptic longitudes (radians, [0, 2π)) from local
/// sidereal time, obliquity, and geodetic latitude.
///
/// `tan(Asc) = -cos(θ) / (sin(θ)·cos(ε) + tan(φ)·sin(ε))`
/// `tan(MC)  = sin(θ) / (cos(θ)·cos(ε))`
///
/// The ecliptic crosses the horizon twice; the two solutions differ by π and
/// the atan2 argument signs here select the eastern (rising) crossing.
pub fn asc_mc_rad(lst: f64, eps: f64, latitude: f64) -> (f64, f64) {
    let (sin_t, cos_t) = lst.sin_cos();
    let (sin_e, cos_e) = eps.sin_cos();

    let asc = wrap_rad(cos_t.atan2(-(sin_t * cos_e + latitude.tan() * sin_e)));
    let mc = wrap_rad(sin_t.atan2(cos_t * cos_e));
    (asc, mc)
}

/// Ecliptic longitude of the ecliptic point with right ascension `ra`.
///
/// `λ = atan2(sin(RA), cos(RA)·cos(ε))`, wrapped to [0, 2π). Only valid for
/// points on the ecliptic (latitude 0), which is all the cusp formulas need.
pub fn ra_to_lambda_rad(ra: f64, eps: f64) -> f64 {
    wrap_rad(ra.sin().atan2(ra.cos() * eps.cos()))
}

/// Declination of the ecliptic point at longitude `lambda`:
/// `δ = asin(sin(ε)·sin(λ))`.
pub fn ecliptic_point_dec_rad(lambda: f64, eps: f64) -> f64 {
    (eps.sin() * lambda.sin()).clamp(-1.0, 1.0).asin()
}
