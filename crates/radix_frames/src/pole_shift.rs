//! Generic pole-shift rotation.
//!
//! Rotates a spherical position into a frame whose pole is tilted by `shift`
//! radians, the common step behind ecliptic/equatorial/local frame changes
//! when expressed as a single tilt.

use radix_time::wrap_rad;

use crate::clamp_unit;

/// Rotate (azimuth, altitude) by a pole tilt of `shift` radians.
///
/// Returns the (azimuth, altitude) the same direction has in the tilted
/// frame. A shift of zero is the identity.
pub fn pole_shift(az: f64, alt: f64, shift: f64) -> (f64, f64) {
    let (sin_alt, cos_alt) = alt.sin_cos();
    let (sin_az, cos_az) = az.sin_cos();
    let (sin_sh, cos_sh) = shift.sin_cos();

    let x = cos_alt * sin_az * cos_sh - sin_alt * sin_sh;
    let y = cos_alt * cos_az;
    let az1 = wrap_rad(x.atan2(y));
    let alt1 = clamp_unit(cos_alt * sin_az * sin_sh + sin_alt * cos_sh).asin();

    (az1, alt1)
}
