//! Full-chart assembly: all body positions plus house cusps for one
//! instant and place.

use log::debug;
use radix_eph::EphemerisStore;
use radix_houses::{compute_cusps, HouseSystem};
use radix_time::mean_obliquity_rad;
use serde::{Deserialize, Serialize};

use crate::bodies::{ALL_BODIES, Body};
use crate::position::{body_position, BodyPosition, CalcFlags};

/// A complete computed chart.
///
/// `positions` is indexed by [`Body::index`]. The Ascendant and Midheaven
/// slots carry the chart angles from the house computation; their latitude
/// and distance are zero by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub jd: f64,
    pub obliquity_deg: f64,
    pub positions: [BodyPosition; 21],
    pub cusps_deg: [f64; 12],
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub house_system: HouseSystem,
    pub warning: Option<String>,
}

/// Compute every body position and the house cusps for one chart.
///
/// `longitude_east_deg` is positive east, `latitude_deg` positive north.
pub fn compute_chart(
    store: &EphemerisStore,
    jd: f64,
    longitude_east_deg: f64,
    latitude_deg: f64,
    flags: CalcFlags,
    system: HouseSystem,
) -> ChartSnapshot {
    let houses = compute_cusps(
        jd,
        longitude_east_deg.to_radians(),
        latitude_deg.to_radians(),
        system,
    );

    let mut positions = [BodyPosition::invalid(); 21];
    for body in ALL_BODIES {
        positions[body.index()] = body_position(store, body, jd, flags);
    }

    // The chart angles are house results, not ephemeris lookups.
    let angle = |lon: f64| BodyPosition {
        longitude_deg: lon,
        latitude_deg: 0.0,
        distance_au: 0.0,
        speed_deg_per_day: 0.0,
        valid: true,
    };
    positions[Body::Ascendant.index()] = angle(houses.asc_deg);
    positions[Body::Midheaven.index()] = angle(houses.mc_deg);

    let invalid = positions.iter().filter(|p| !p.valid).count();
    if invalid > 0 {
        debug!("chart at JD {jd}: {invalid} bodies without data");
    }

    ChartSnapshot {
        jd,
        obliquity_deg: mean_obliquity_rad(jd).to_degrees(),
        positions,
        cusps_deg: houses.cusps_deg,
        ascendant_deg: houses.asc_deg,
        mc_deg: houses.mc_deg,
        house_system: system,
        warning: houses.warning,
    }
}
