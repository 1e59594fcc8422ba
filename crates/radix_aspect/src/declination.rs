//! Declination aspects: parallels and contra-parallels.

use serde::{Deserialize, Serialize};

/// Declination aspect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclinationKind {
    /// Same hemisphere, near-equal declination.
    Parallel,
    /// Opposite hemispheres, near-equal magnitude.
    ContraParallel,
}

/// A detected declination aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeclinationAspect {
    pub kind: DeclinationKind,
    /// Signed deviation: `dec2 − dec1` for parallels,
    /// `|dec2| − |dec1|` for contra-parallels. Degrees.
    pub delta_deg: f64,
    /// `|delta_deg|`.
    pub magnitude_deg: f64,
}

/// Classify the declination relationship of two bodies (degrees).
///
/// A zero declination sits on the equator and is treated as belonging to
/// either hemisphere, so it can only form a parallel. Contra-parallels
/// require strictly opposite signs.
pub fn detect_declination_aspect(
    dec1_deg: f64,
    dec2_deg: f64,
    orb_deg: f64,
) -> Option<DeclinationAspect> {
    let opposite = (dec1_deg > 0.0 && dec2_deg < 0.0) || (dec1_deg < 0.0 && dec2_deg > 0.0);

    let (kind, delta) = if opposite {
        (
            DeclinationKind::ContraParallel,
            dec2_deg.abs() - dec1_deg.abs(),
        )
    } else {
        (DeclinationKind::Parallel, dec2_deg - dec1_deg)
    };

    if delta.abs() <= orb_deg {
        Some(DeclinationAspect {
            kind,
            delta_deg: delta,
            magnitude_deg: delta.abs(),
        })
    } else {
        None
    }
}
