//! Text-file ephemeris storage and interpolation.
//!
//! This crate provides:
//! - `EphemerisStore`: an owned, immutable-after-load data set built from the
//!   `astroeph.dat` / `astronam.dat` file pair
//! - Range-checked value queries with wrap-aware linear interpolation
//! - Per-body position slicing and body metadata lookup

pub mod error;
pub mod store;

pub use error::EphError;
pub use store::{BodyInfo, EphemerisRecord, EphemerisStore};
