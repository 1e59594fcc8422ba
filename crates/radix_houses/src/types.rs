//! House system selection and the cusp result type.

use serde::{Deserialize, Serialize};

/// Supported house division methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    Equal,
    Placidus,
    Koch,
    Campanus,
    Regiomontanus,
    Porphyry,
    PorphyryNeo,
    Whole,
    Topocentric,
    Meridian,
    Morinus,
    EqualFromMc,
    Alcabitius,
}

impl HouseSystem {
    /// Systems whose intermediate cusps divide semi-arcs in time and
    /// degenerate toward the polar circles.
    pub fn is_semi_arc(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch | Self::Topocentric)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Campanus => "Campanus",
            Self::Regiomontanus => "Regiomontanus",
            Self::Porphyry => "Porphyry",
            Self::PorphyryNeo => "Porphyry-Neo",
            Self::Whole => "Whole Sign",
            Self::Topocentric => "Topocentric",
            Self::Meridian => "Meridian",
            Self::Morinus => "Morinus",
            Self::EqualFromMc => "Equal from MC",
            Self::Alcabitius => "Alcabitius",
        }
    }
}

/// The result of one house computation.
///
/// `cusps_deg[0]` is house 1. The advisory `warning` never affects `valid`;
/// `converged` reports whether the iterative semi-arc solve (Placidus) hit
/// its tolerance before the iteration cap, and is `true` for closed-form
/// systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub asc_deg: f64,
    pub mc_deg: f64,
    pub cusps_deg: [f64; 12],
    pub valid: bool,
    pub converged: bool,
    pub warning: Option<String>,
}
