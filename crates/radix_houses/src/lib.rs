//! House cusp computation for 13 house division methods.
//!
//! Implements Equal, Placidus, Koch, Campanus, Regiomontanus, Porphyry,
//! Porphyry-Neo, Whole Sign, Topocentric (Polich-Page), Meridian (Axial),
//! Morinus, Equal-from-MC, and Alcabitius.
//!
//! Sources: standard spherical astronomy (Meeus, Montenbruck & Pfleger) and
//! the classical cusp formulas as circulated in house-system literature.

pub mod angles;
pub mod cusps;
pub mod types;

pub use angles::{asc_mc_rad, ra_to_lambda_rad};
pub use cusps::compute_cusps;
pub use types::{HouseCusps, HouseSystem};
