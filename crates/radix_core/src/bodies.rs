//! The closed set of chart bodies.
//!
//! Indices double as value-row slots in the ephemeris data set: body `i`
//! occupies columns `3i..3i+3` of each sample record. Computed points
//! (nodes, Lilith) and the chart angles keep their slots reserved even
//! though their positions never come from the data set.

use serde::{Deserialize, Serialize};

/// Everything a chart can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
    Lilith,
    Earth,
    Ascendant,
    Midheaven,
}

/// All bodies in slot order.
pub const ALL_BODIES: [Body; 21] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
    Body::Chiron,
    Body::Ceres,
    Body::Pallas,
    Body::Juno,
    Body::Vesta,
    Body::Lilith,
    Body::Earth,
    Body::Ascendant,
    Body::Midheaven,
];

impl Body {
    /// Slot index into the ephemeris value row.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a slot index back into a [`Body`].
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALL_BODIES.len() {
            Some(ALL_BODIES[index])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Chiron => "Chiron",
            Self::Ceres => "Ceres",
            Self::Pallas => "Pallas",
            Self::Juno => "Juno",
            Self::Vesta => "Vesta",
            Self::Lilith => "Lilith",
            Self::Earth => "Earth",
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
        }
    }

    /// Whether this body's position comes from mean-element polynomials
    /// rather than the sampled data set.
    pub const fn is_computed_point(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode | Self::Lilith)
    }

    /// Whether this slot is a chart angle, positioned only within a full
    /// chart computation.
    pub const fn is_chart_angle(self) -> bool {
        matches!(self, Self::Ascendant | Self::Midheaven)
    }
}
