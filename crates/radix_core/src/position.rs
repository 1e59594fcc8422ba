//! Per-body position lookup: sampled bodies from the data set, computed
//! points from mean-element polynomials.

use radix_eph::EphemerisStore;
use radix_time::{angular_diff_deg, julian_century, normalize_deg};
use serde::{Deserialize, Serialize};

use crate::bodies::Body;

/// Calculation switches.
///
/// `heliocentric`, `true_position`, and `mean_equinox` select variants the
/// sampled data set does not distinguish; they are carried through so a data
/// set that does can honor them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcFlags {
    pub heliocentric: bool,
    pub true_position: bool,
    pub mean_equinox: bool,
    /// Shift the query instant from UT to ephemeris time via a simplified
    /// Delta-T model.
    pub ephemeris_time: bool,
    pub speed: bool,
    pub latitude: bool,
    pub distance: bool,
}

impl Default for CalcFlags {
    fn default() -> Self {
        Self {
            heliocentric: false,
            true_position: false,
            mean_equinox: false,
            ephemeris_time: false,
            speed: true,
            latitude: true,
            distance: true,
        }
    }
}

/// One body's computed place. When `valid` is false the angular fields are
/// meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    pub valid: bool,
}

impl BodyPosition {
    pub const fn invalid() -> Self {
        Self {
            longitude_deg: 0.0,
            latitude_deg: 0.0,
            distance_au: 0.0,
            speed_deg_per_day: 0.0,
            valid: false,
        }
    }
}

/// Simplified Delta-T (TT - UT) in days. Linearized around J2000; adequate
/// for the sampled data set's precision.
pub fn delta_t_days(jd: f64) -> f64 {
    let t = julian_century(jd);
    (64.184 + 59.0 * t) / 86_400.0
}

/// Mean longitude of the ascending lunar node, degrees.
pub fn mean_lunar_node_deg(jd: f64) -> f64 {
    let t = julian_century(jd);
    normalize_deg(125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0)
}

/// Mean longitude of the lunar apogee (Black Moon Lilith), degrees.
pub fn mean_lunar_apogee_deg(jd: f64) -> f64 {
    let t = julian_century(jd);
    normalize_deg(83.353_246_5 + 4069.013_728_7 * t - 0.01032 * t * t - t * t * t / 800_000.0)
}

/// Longitude-only lookup used for speed differencing. `None` when the body
/// has no position at `jd`.
fn longitude_at(store: &EphemerisStore, body: Body, jd: f64) -> Option<f64> {
    match body {
        Body::NorthNode => Some(mean_lunar_node_deg(jd)),
        Body::SouthNode => Some(normalize_deg(mean_lunar_node_deg(jd) + 180.0)),
        Body::Lilith => Some(mean_lunar_apogee_deg(jd)),
        Body::Ascendant | Body::Midheaven => None,
        _ => store.body_position(body.index(), jd).map(|(lon, _, _)| lon),
    }
}

/// Compute one body's position at `jd` (UT unless `flags.ephemeris_time`).
///
/// Sampled bodies come from the store; the lunar nodes and Lilith from
/// mean-element polynomials. Chart angles and bodies without data at `jd`
/// come back with `valid == false`.
pub fn body_position(store: &EphemerisStore, body: Body, jd: f64, flags: CalcFlags) -> BodyPosition {
    let jd = if flags.ephemeris_time {
        jd + delta_t_days(jd)
    } else {
        jd
    };

    let (longitude_deg, latitude_deg, distance_au) = match body {
        Body::NorthNode => (mean_lunar_node_deg(jd), 0.0, 0.0),
        Body::SouthNode => (normalize_deg(mean_lunar_node_deg(jd) + 180.0), 0.0, 0.0),
        Body::Lilith => (mean_lunar_apogee_deg(jd), 0.0, 0.0),
        Body::Ascendant | Body::Midheaven => return BodyPosition::invalid(),
        _ => match store.body_position(body.index(), jd) {
            Some(p) => p,
            None => return BodyPosition::invalid(),
        },
    };

    let speed_deg_per_day = if flags.speed {
        match (
            longitude_at(store, body, jd - 0.5),
            longitude_at(store, body, jd + 0.5),
        ) {
            (Some(before), Some(after)) => angular_diff_deg(before, after),
            _ => 0.0,
        }
    } else {
        0.0
    };

    BodyPosition {
        longitude_deg: normalize_deg(longitude_deg),
        latitude_deg: if flags.latitude { latitude_deg } else { 0.0 },
        distance_au: if flags.distance { distance_au } else { 0.0 },
        speed_deg_per_day,
        valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::ALL_BODIES;

    const J2000: f64 = 2_451_545.0;

    /// Synthetic data set: Sun at 1°/day from 280°, Moon at 13°/day from 0°,
    /// sampled daily for 40 days around J2000. Slots for the remaining
    /// sampled bodies are filled with fixed values.
    fn synthetic_store() -> EphemerisStore {
        let mut samples = String::new();
        for i in 0..81 {
            let jd = J2000 - 40.0 + i as f64;
            let d = jd - J2000;
            let sun = (280.0 + d).rem_euclid(360.0);
            let moon = (13.0 * d).rem_euclid(360.0);
            samples.push_str(&format!("{jd:.1} {sun:.6} 0.0 1.0 {moon:.6} 1.2 0.0026"));
            for slot in 2..18 {
                samples.push_str(&format!(" {:.1} 0.0 1.0", (slot * 17) as f64));
            }
            samples.push('\n');
        }
        let names = "0|Sun|Su|\n1|Moon|Mo|\n";
        EphemerisStore::parse(&samples, names).unwrap()
    }

    #[test]
    fn sun_speed_is_one_degree_per_day() {
        let store = synthetic_store();
        let p = body_position(&store, Body::Sun, J2000 + 3.25, CalcFlags::default());
        assert!(p.valid);
        assert!((p.speed_deg_per_day - 1.0).abs() < 1e-9, "{}", p.speed_deg_per_day);
        assert!((p.longitude_deg - 283.25).abs() < 1e-9);
    }

    #[test]
    fn moon_speed_crosses_the_wrap() {
        let store = synthetic_store();
        // Moon longitude passes 360° near d = 27.7; the central difference
        // must still read +13°/day.
        let p = body_position(&store, Body::Moon, J2000 + 27.7, CalcFlags::default());
        assert!(p.valid);
        assert!((p.speed_deg_per_day - 13.0).abs() < 1e-9);
    }

    #[test]
    fn node_and_lilith_need_no_store_data() {
        let store = synthetic_store();
        // Query far outside the sampled span.
        let jd = J2000 + 36525.0;
        for body in [Body::NorthNode, Body::SouthNode, Body::Lilith] {
            let p = body_position(&store, body, jd, CalcFlags::default());
            assert!(p.valid, "{}", body.name());
        }
    }

    #[test]
    fn south_node_opposes_north_node() {
        let store = synthetic_store();
        let n = body_position(&store, Body::NorthNode, J2000 + 5.0, CalcFlags::default());
        let s = body_position(&store, Body::SouthNode, J2000 + 5.0, CalcFlags::default());
        let d = angular_diff_deg(n.longitude_deg, s.longitude_deg).abs();
        assert!((d - 180.0).abs() < 1e-9);
    }

    #[test]
    fn node_at_j2000_matches_mean_elements() {
        assert!((mean_lunar_node_deg(J2000) - 125.04452).abs() < 1e-9);
        // The node regresses about 1934° per Julian century.
        let later = mean_lunar_node_deg(J2000 + 36525.0);
        assert!((later - normalize_deg(125.04452 - 1934.136261 + 0.0020708 + 1.0 / 450_000.0)).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_is_invalid() {
        let store = synthetic_store();
        let p = body_position(&store, Body::Sun, J2000 + 500.0, CalcFlags::default());
        assert!(!p.valid);
    }

    #[test]
    fn missing_slot_is_invalid() {
        let store = synthetic_store();
        // Slots stop at Lilith (17); Earth (18) has no columns.
        let p = body_position(&store, Body::Earth, J2000, CalcFlags::default());
        assert!(!p.valid);
    }

    #[test]
    fn chart_angles_are_invalid_standalone() {
        let store = synthetic_store();
        for body in [Body::Ascendant, Body::Midheaven] {
            assert!(!body_position(&store, body, J2000, CalcFlags::default()).valid);
        }
    }

    #[test]
    fn flags_suppress_optional_fields() {
        let store = synthetic_store();
        let flags = CalcFlags {
            speed: false,
            latitude: false,
            distance: false,
            ..CalcFlags::default()
        };
        let p = body_position(&store, Body::Moon, J2000 + 1.0, flags);
        assert!(p.valid);
        assert_eq!(p.speed_deg_per_day, 0.0);
        assert_eq!(p.latitude_deg, 0.0);
        assert_eq!(p.distance_au, 0.0);
    }

    #[test]
    fn ephemeris_time_shifts_the_instant() {
        let store = synthetic_store();
        let ut = body_position(&store, Body::Sun, J2000, CalcFlags::default());
        let et = body_position(
            &store,
            Body::Sun,
            J2000,
            CalcFlags {
                ephemeris_time: true,
                ..CalcFlags::default()
            },
        );
        // Delta-T at J2000 is 64.184 s; the 1°/day Sun moves accordingly.
        let expected = 64.184 / 86_400.0;
        let shift = angular_diff_deg(ut.longitude_deg, et.longitude_deg);
        assert!((shift - expected).abs() < 1e-9, "{shift}");
    }

    #[test]
    fn every_body_yields_a_verdict() {
        let store = synthetic_store();
        for body in ALL_BODIES {
            let p = body_position(&store, body, J2000, CalcFlags::default());
            assert!(p.longitude_deg.is_finite());
            let _ = p.valid;
        }
    }
}
