//! Major-aspect classification between two ecliptic longitudes.

use radix_time::{angular_diff_deg, normalize_deg};
use serde::{Deserialize, Serialize};

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Exact angle of the aspect in degrees.
    pub fn exact_angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// All kinds in detection priority order (ascending angle).
    pub const ALL: [AspectKind; 5] = [
        Self::Conjunction,
        Self::Sextile,
        Self::Square,
        Self::Trine,
        Self::Opposition,
    ];
}

/// A detected aspect between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectResult {
    pub kind: AspectKind,
    /// Exact angle of the matched aspect, degrees.
    pub exact_angle_deg: f64,
    /// Signed deviation from exact, degrees, within ±orb.
    pub delta_deg: f64,
    /// Whether the aspect is applying (deviation shrinking). `None` when no
    /// speeds were supplied.
    pub applying: Option<bool>,
}

/// Classify the aspect between two ecliptic longitudes (degrees).
///
/// Both longitudes are wrapped to [0, 360); the minimal circular separation
/// is tested against each major angle in ascending order, and the first one
/// within `orb_deg` wins. Symmetric in its longitude arguments.
pub fn detect_aspect(lon1_deg: f64, lon2_deg: f64, orb_deg: f64) -> Option<AspectResult> {
    let a1 = normalize_deg(lon1_deg);
    let a2 = normalize_deg(lon2_deg);
    let mut d = (a1 - a2).abs();
    if d > 180.0 {
        d = 360.0 - d;
    }

    for kind in AspectKind::ALL {
        let delta = d - kind.exact_angle_deg();
        if delta.abs() <= orb_deg {
            return Some(AspectResult {
                kind,
                exact_angle_deg: kind.exact_angle_deg(),
                delta_deg: delta,
                applying: None,
            });
        }
    }
    None
}

/// Classify an aspect and whether it is applying, from longitudes and
/// longitude speeds (degrees, degrees/day).
///
/// The deviation's time derivative follows from the signed wrapped
/// separation: applying iff the deviation and its rate have opposite signs.
pub fn detect_aspect_with_speeds(
    lon1_deg: f64,
    speed1: f64,
    lon2_deg: f64,
    speed2: f64,
    orb_deg: f64,
) -> Option<AspectResult> {
    let mut result = detect_aspect(lon1_deg, lon2_deg, orb_deg)?;

    let delta_wrap = angular_diff_deg(lon1_deg, lon2_deg);
    let rate = delta_wrap.signum() * (speed2 - speed1);
    let delta = result.delta_deg;
    result.applying = Some((delta > 0.0 && rate < 0.0) || (delta < 0.0 && rate > 0.0));
    Some(result)
}
