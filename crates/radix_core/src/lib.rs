//! Chart computation: bodies, calculation flags, and full-chart assembly
//! over an [`radix_eph::EphemerisStore`].

pub mod bodies;
pub mod chart;
pub mod position;

pub use bodies::{ALL_BODIES, Body};
pub use chart::{ChartSnapshot, compute_chart};
pub use position::{
    BodyPosition, CalcFlags, body_position, delta_t_days, mean_lunar_apogee_deg,
    mean_lunar_node_deg,
};
