//! Greenwich and Local Mean Sidereal Time.
//!
//! Uses the simplified Meeus formulation: the seconds polynomial evaluated at
//! the preceding 0h UT, plus the elapsed day fraction scaled by the
//! solar-to-sidereal ratio. Accurate to well under a second of time in the
//! calendar era, which is far below house-cusp precision needs.
//!
//! Source: Meeus, Astronomical Algorithms, ch. 12.

use std::f64::consts::TAU;

use crate::angle::wrap_rad;
use crate::julian::J2000_JD;

/// Ratio of a mean solar day to a mean sidereal day.
const SOLAR_TO_SIDEREAL: f64 = 1.002_737_909_35;

/// Greenwich Mean Sidereal Time at a UT Julian Date, in radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    // Midnight preceding jd_ut.
    let jd0 = (jd_ut - 0.5).floor() + 0.5;
    let t = (jd0 - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;

    // GMST at 0h UT, in seconds of time.
    let gmst0_sec = 24_110.54841 + 8_640_184.812866 * t + 0.093104 * t2 - 6.2e-6 * t3;

    let day_frac_sec = (jd_ut - jd0) * 86_400.0 * SOLAR_TO_SIDEREAL;

    wrap_rad((gmst0_sec + day_frac_sec) * TAU / 86_400.0)
}

/// Local Mean Sidereal Time from a UT Julian Date and east longitude.
///
/// LST = GMST + longitude_east_rad, radians in [0, 2π).
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_rad: f64) -> f64 {
    wrap_rad(gmst_rad(jd_ut) + longitude_east_rad)
}
