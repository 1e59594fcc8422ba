//! Event search over an ephemeris data set: lunar phases, planetary
//! stations, and eclipse candidates.
//!
//! All searches share the coarse-scan + bisection pattern and return
//! `None` rather than erroring when no event lies within reach of the
//! search window or the data set.

pub mod config;
pub mod eclipse;
pub mod phase;
pub mod station;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::SearchConfig;
pub use eclipse::{EclipseEvent, EclipseKind, find_next_lunar_eclipse, find_next_solar_eclipse};
pub use phase::{LunarPhase, PhaseEvent, find_next_lunar_phase};
pub use station::{StationEvent, StationKind, find_nearest_station};
