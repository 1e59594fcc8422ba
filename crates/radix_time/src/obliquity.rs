//! Mean obliquity of the ecliptic.
//!
//! Source: IAU 2006 polynomial (Hilton et al. 2006). Valid within a few
//! millennia of J2000.0; outside that the polynomial diverges, which is
//! accepted for calendar-era charts.

use std::f64::consts::PI;

use crate::julian::julian_century;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Mean obliquity of the ecliptic at a Julian Date, in radians.
///
/// Polynomial (arcseconds), T = Julian centuries from J2000.0:
///   84381.406 − 46.836769·T − 0.0001831·T² + 0.00200340·T³
///   − 5.76e-7·T⁴ − 4.34e-8·T⁵
pub fn mean_obliquity_rad(jd: f64) -> f64 {
    let t = julian_century(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let eps_arcsec = 84_381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 5.76e-7 * t4
        - 4.34e-8 * t5;

    eps_arcsec * ARCSEC_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn obliquity_at_j2000() {
        // 84381.406″ = 23.4392794°
        let eps_deg = mean_obliquity_rad(J2000_JD).to_degrees();
        assert!(
            (eps_deg - 23.439_279_4).abs() < 1e-6,
            "eps = {eps_deg}°, expected ~23.4392794°"
        );
    }

    #[test]
    fn obliquity_decreases_over_centuries() {
        let now = mean_obliquity_rad(J2000_JD);
        let later = mean_obliquity_rad(J2000_JD + 36525.0);
        assert!(later < now, "obliquity should shrink over a century");
        // About 46.8″ per century.
        let delta_arcsec = (now - later).to_degrees() * 3600.0;
        assert!((delta_arcsec - 46.8).abs() < 0.1, "delta = {delta_arcsec}″");
    }
}
