//! Eclipse search: syzygies filtered by the Moon's ecliptic latitude.
//!
//! Deliberately simplified geometry: an eclipse is a New or Full Moon with
//! the Moon close enough to the node, judged by its latitude alone. No
//! shadow-cone or saros modelling.

use log::debug;
use radix_core::Body;
use radix_eph::EphemerisStore;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::phase::{LunarPhase, find_next_lunar_phase};

/// Latitude bound for a solar eclipse at New Moon, degrees.
const SOLAR_LAT_LIMIT_DEG: f64 = 1.5;
/// Latitude bound for a lunar eclipse at Full Moon, degrees.
const LUNAR_LAT_LIMIT_DEG: f64 = 1.0;
/// Within this latitude the eclipse is flagged central, degrees.
const CENTRAL_LAT_LIMIT_DEG: f64 = 0.3;
/// How many successive syzygies to examine before giving up.
const MAX_LUNATIONS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EclipseKind {
    Solar,
    Lunar,
}

/// A candidate eclipse instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseEvent {
    pub jd: f64,
    pub kind: EclipseKind,
    pub moon_latitude_deg: f64,
    /// Latitude within the central band; a deep, near-nodal eclipse.
    pub central: bool,
}

/// Next solar eclipse at or after `start_jd`: the next New Moon with the
/// Moon within 1.5° of the ecliptic.
pub fn find_next_solar_eclipse(
    store: &EphemerisStore,
    start_jd: f64,
    config: &SearchConfig,
) -> Option<EclipseEvent> {
    find_eclipse(
        store,
        start_jd,
        config,
        LunarPhase::NewMoon,
        EclipseKind::Solar,
        SOLAR_LAT_LIMIT_DEG,
    )
}

/// Next lunar eclipse at or after `start_jd`: the next Full Moon with the
/// Moon within 1.0° of the ecliptic.
pub fn find_next_lunar_eclipse(
    store: &EphemerisStore,
    start_jd: f64,
    config: &SearchConfig,
) -> Option<EclipseEvent> {
    find_eclipse(
        store,
        start_jd,
        config,
        LunarPhase::FullMoon,
        EclipseKind::Lunar,
        LUNAR_LAT_LIMIT_DEG,
    )
}

fn find_eclipse(
    store: &EphemerisStore,
    start_jd: f64,
    config: &SearchConfig,
    phase: LunarPhase,
    kind: EclipseKind,
    lat_limit_deg: f64,
) -> Option<EclipseEvent> {
    let mut jd = start_jd;
    for _ in 0..MAX_LUNATIONS {
        let syzygy = find_next_lunar_phase(store, jd, phase, config)?;
        let (_, moon_lat, _) = store.body_position(Body::Moon.index(), syzygy.jd)?;

        if moon_lat.abs() <= lat_limit_deg {
            debug!(
                "{kind:?} eclipse at JD {:.5}, moon latitude {moon_lat:.3}°",
                syzygy.jd
            );
            return Some(EclipseEvent {
                jd: syzygy.jd,
                kind,
                moon_latitude_deg: moon_lat,
                central: moon_lat.abs() <= CENTRAL_LAT_LIMIT_DEG,
            });
        }
        jd = syzygy.jd + 1.0;
    }
    None
}
