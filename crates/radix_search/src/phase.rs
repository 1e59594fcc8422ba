//! Lunar phase search: coarse forward scan on the Sun-Moon elongation,
//! refined by bisection.

use log::debug;
use radix_core::Body;
use radix_eph::EphemerisStore;
use radix_time::{angular_diff_deg, normalize_deg};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// Bracket guard: a sign change whose endpoint magnitudes exceed this is the
/// ±180° wrap of the elongation offset, not a real crossing.
const BRACKET_GUARD_DEG: f64 = 120.0;
/// Accept a bisection midpoint once the offset is this close to zero.
const OFFSET_TOL_DEG: f64 = 1e-6;

/// The four principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl LunarPhase {
    /// Sun-Moon elongation at which this phase is exact, degrees.
    pub const fn target_elongation_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FirstQuarter => 90.0,
            Self::FullMoon => 180.0,
            Self::LastQuarter => 270.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }
}

/// An exact lunar phase instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseEvent {
    pub jd: f64,
    pub phase: LunarPhase,
}

/// Geocentric Sun-Moon elongation in [0°, 360°), or `None` when either body
/// has no data at `jd`.
pub(crate) fn elongation_deg(store: &EphemerisStore, jd: f64) -> Option<f64> {
    let (sun_lon, _, _) = store.body_position(Body::Sun.index(), jd)?;
    let (moon_lon, _, _) = store.body_position(Body::Moon.index(), jd)?;
    Some(normalize_deg(moon_lon - sun_lon))
}

/// Find the first instant at or after `start_jd` where the Moon reaches
/// `phase`, or `None` when no crossing lies within the scan window.
pub fn find_next_lunar_phase(
    store: &EphemerisStore,
    start_jd: f64,
    phase: LunarPhase,
    config: &SearchConfig,
) -> Option<PhaseEvent> {
    config.validate().ok()?;
    let target = phase.target_elongation_deg();
    // Signed offset from the target, in (-180°, 180°].
    let offset = |jd: f64| -> Option<f64> {
        Some(angular_diff_deg(target, elongation_deg(store, jd)?))
    };

    let max_steps = (config.max_scan_days / config.step_days).ceil() as usize;
    let mut t_prev = start_jd;
    let mut f_prev = offset(t_prev)?;

    for _ in 0..max_steps {
        let t_curr = t_prev + config.step_days;
        let f_curr = offset(t_curr)?;

        // The elongation advances through the target when the offset crosses
        // zero from below. A sign change with large endpoints is the wrap at
        // the opposite point of the cycle.
        if f_prev <= 0.0 && f_curr >= 0.0 && f_prev.abs().max(f_curr.abs()) <= BRACKET_GUARD_DEG {
            let jd = bisect_offset(t_prev, f_prev, t_curr, config, &offset)?;
            debug!("{} at JD {jd:.6}", phase.name());
            return Some(PhaseEvent { jd, phase });
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }
    None
}

/// Bisect the offset zero crossing inside [t_a, t_b].
fn bisect_offset(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &SearchConfig,
    offset: &impl Fn(f64) -> Option<f64>,
) -> Option<f64> {
    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = offset(t_mid)?;

        if f_mid.abs() < OFFSET_TOL_DEG || (t_b - t_a).abs() < config.convergence_days {
            return Some(t_mid);
        }
        if (f_a <= 0.0) == (f_mid <= 0.0) {
            t_a = t_mid;
            f_a = f_mid;
        } else {
            t_b = t_mid;
        }
    }
    Some(0.5 * (t_a + t_b))
}
