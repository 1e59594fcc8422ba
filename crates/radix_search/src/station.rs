//! Station search: the zero crossing of a body's longitude speed nearest a
//! given instant.

use log::debug;
use radix_core::Body;
use radix_eph::EphemerisStore;
use radix_time::angular_diff_deg;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// Bracket expansion factor and cap.
const EXPANSION_FACTOR: f64 = 1.7;
const MAX_EXPANSIONS: u32 = 30;
/// Accept a bisection midpoint once the speed is this small, deg/day.
const SPEED_TOL: f64 = 1e-4;
/// Interval tolerance for the station bisection, days.
const STATION_INTERVAL_TOL: f64 = 1e-5;
/// Offset for the classification speed samples, days.
const CLASSIFY_OFFSET: f64 = 1e-3;

/// Which way the body's motion turns at the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationKind {
    /// Direct motion ends; the body turns retrograde.
    RetrogradeStart,
    /// Retrograde motion ends; the body resumes direct motion.
    DirectStart,
}

/// A stationary point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationEvent {
    pub jd: f64,
    pub body: Body,
    pub kind: StationKind,
}

/// Longitude speed by central difference over ±0.5 day, deg/day.
pub(crate) fn longitude_speed(store: &EphemerisStore, body: Body, jd: f64) -> Option<f64> {
    let (before, _, _) = store.body_position(body.index(), jd - 0.5)?;
    let (after, _, _) = store.body_position(body.index(), jd + 0.5)?;
    Some(angular_diff_deg(before, after))
}

/// Find the station nearest `approx_jd` by expanding a bracket around it on
/// the longitude speed, then bisecting the sign change.
///
/// The Sun, Moon, and Earth never station geocentrically and yield `None`.
pub fn find_nearest_station(
    store: &EphemerisStore,
    body: Body,
    approx_jd: f64,
    config: &SearchConfig,
) -> Option<StationEvent> {
    config.validate().ok()?;
    if matches!(body, Body::Sun | Body::Moon | Body::Earth) || body.is_chart_angle() {
        return None;
    }

    // Expand around the hint until the speed changes sign across the bracket.
    let mut half_width = config.step_days;
    let (mut lo, mut hi) = (approx_jd - half_width, approx_jd + half_width);
    let mut f_lo = longitude_speed(store, body, lo)?;
    let mut f_hi = longitude_speed(store, body, hi)?;
    let mut expansions = 0;
    while f_lo * f_hi > 0.0 {
        expansions += 1;
        if expansions > MAX_EXPANSIONS {
            return None;
        }
        half_width *= EXPANSION_FACTOR;
        lo = approx_jd - half_width;
        hi = approx_jd + half_width;
        f_lo = longitude_speed(store, body, lo)?;
        f_hi = longitude_speed(store, body, hi)?;
    }

    for _ in 0..config.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = longitude_speed(store, body, mid)?;
        if f_mid.abs() < SPEED_TOL || (hi - lo).abs() < STATION_INTERVAL_TOL {
            lo = mid;
            hi = mid;
            break;
        }
        if (f_lo <= 0.0) == (f_mid <= 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    let jd = 0.5 * (lo + hi);

    // Classify from the speeds just before and after the station; fall back
    // on the bracket orientation when the samples are ambiguous.
    let kind = match (
        longitude_speed(store, body, jd - CLASSIFY_OFFSET),
        longitude_speed(store, body, jd + CLASSIFY_OFFSET),
    ) {
        (Some(sl), Some(sr)) if sl > 0.0 && sr < 0.0 => StationKind::RetrogradeStart,
        (Some(sl), Some(sr)) if sl < 0.0 && sr > 0.0 => StationKind::DirectStart,
        _ if f_lo > 0.0 => StationKind::RetrogradeStart,
        _ => StationKind::DirectStart,
    };

    debug!("{} station at JD {jd:.5} ({kind:?})", body.name());
    Some(StationEvent { jd, body, kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_store;

    const J2000: f64 = 2_451_545.0;

    /// Mars on a parabolic longitude track turning at day 15, plus filler
    /// slots for the inner bodies.
    fn mars_store(opening: f64) -> EphemerisStore {
        build_store(
            J2000,
            30,
            &[
                &|d| (280.0 + d, 0.0, 1.0),
                &|d| (13.0 * d, 0.0, 0.0026),
                &|d| (40.0 + 1.2 * d, 0.0, 0.8),
                &|d| (70.0 + 1.1 * d, 0.0, 0.7),
                &move |d| (140.0 + opening * (d - 15.0) * (d - 15.0), 0.0, 1.5),
            ],
        )
    }

    #[test]
    fn finds_a_direct_station() {
        // Opening upward: speed runs negative then positive.
        let store = mars_store(0.05);
        let event =
            find_nearest_station(&store, Body::Mars, J2000 + 12.0, &SearchConfig::default())
                .unwrap();
        assert_eq!(event.kind, StationKind::DirectStart);
        assert!((event.jd - (J2000 + 15.0)).abs() < 1.0, "{}", event.jd);
    }

    #[test]
    fn finds_a_retrograde_station() {
        let store = mars_store(-0.05);
        let event =
            find_nearest_station(&store, Body::Mars, J2000 + 18.0, &SearchConfig::default())
                .unwrap();
        assert_eq!(event.kind, StationKind::RetrogradeStart);
        assert!((event.jd - (J2000 + 15.0)).abs() < 1.0);
    }

    #[test]
    fn rejects_bodies_without_stations() {
        let store = mars_store(0.05);
        for body in [Body::Sun, Body::Moon, Body::Earth] {
            assert!(
                find_nearest_station(&store, body, J2000 + 15.0, &SearchConfig::default())
                    .is_none()
            );
        }
    }

    #[test]
    fn none_when_the_body_never_stations() {
        // Venus moves uniformly in this data set.
        let store = mars_store(0.05);
        assert!(
            find_nearest_station(&store, Body::Venus, J2000 + 15.0, &SearchConfig::default())
                .is_none()
        );
    }

    #[test]
    fn none_outside_coverage() {
        let store = mars_store(0.05);
        assert!(
            find_nearest_station(&store, Body::Mars, J2000 + 500.0, &SearchConfig::default())
                .is_none()
        );
    }
}
