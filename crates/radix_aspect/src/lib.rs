//! Aspect detection between ecliptic longitudes and declinations.
//!
//! This crate provides:
//! - Major-aspect classification against a caller-supplied orb
//! - Applying/separating classification from longitude speeds
//! - Declination parallels and contra-parallels
//! - Grand Trine and T-Square pattern detection over a longitude set

pub mod aspect;
pub mod declination;
pub mod pattern;

pub use aspect::{detect_aspect, detect_aspect_with_speeds, AspectKind, AspectResult};
pub use declination::{detect_declination_aspect, DeclinationAspect, DeclinationKind};
pub use pattern::{detect_aspect_patterns, AspectPattern, PatternKind};
