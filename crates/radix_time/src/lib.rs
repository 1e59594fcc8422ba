//! Time foundations for the chart engine.
//!
//! This crate provides:
//! - Civil date/time types and Julian Date conversion
//! - Julian centuries from J2000.0
//! - Mean obliquity of the ecliptic
//! - Greenwich and Local Mean Sidereal Time
//! - Canonical angle-wrapping helpers shared by the whole workspace

pub mod angle;
pub mod julian;
pub mod obliquity;
pub mod sidereal;

pub use angle::{angular_diff_deg, min_circular_distance_deg, normalize_deg, wrap_rad};
pub use julian::{
    julian_century, julian_day, CivilDate, CivilTime, TimeZoneOffset, J2000_JD,
};
pub use obliquity::mean_obliquity_rad;
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
