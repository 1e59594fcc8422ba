//! Equatorial (J2000) ↔ Galactic conversion.
//!
//! Uses the standard ICRS → Galactic rotation matrix. The inverse direction
//! applies the transpose of the same matrix, so the two directions are exact
//! inverses by construction (up to round-off).

use radix_time::wrap_rad;

use crate::{clamp_unit, Equatorial, Galactic};

/// ICRS equatorial (J2000) to galactic rotation matrix, row-major.
///
/// Rows are the galactic x/y/z axes expressed in equatorial coordinates.
/// Source: Hipparcos catalogue documentation, vol. 1, Eq. 1.5.11.
const EQ_TO_GAL: [[f64; 3]; 3] = [
    [-0.054_875_539_390, -0.873_437_104_725, -0.483_834_991_775],
    [0.494_109_453_633, -0.444_829_594_298, 0.746_982_248_696],
    [-0.867_666_135_681, -0.198_076_389_622, 0.455_983_794_523],
];

fn unit_vector(lon: f64, lat: f64) -> [f64; 3] {
    let (sin_b, cos_b) = lat.sin_cos();
    let (sin_l, cos_l) = lon.sin_cos();
    [cos_b * cos_l, cos_b * sin_l, sin_b]
}

fn to_angles(v: [f64; 3]) -> (f64, f64) {
    let lon = wrap_rad(v[1].atan2(v[0]));
    let lat = clamp_unit(v[2]).asin();
    (lon, lat)
}

/// Equatorial (J2000) to galactic coordinates.
pub fn equatorial_to_galactic(eq: Equatorial) -> Galactic {
    let v = unit_vector(eq.ra, eq.dec);
    let g = [
        EQ_TO_GAL[0][0] * v[0] + EQ_TO_GAL[0][1] * v[1] + EQ_TO_GAL[0][2] * v[2],
        EQ_TO_GAL[1][0] * v[0] + EQ_TO_GAL[1][1] * v[1] + EQ_TO_GAL[1][2] * v[2],
        EQ_TO_GAL[2][0] * v[0] + EQ_TO_GAL[2][1] * v[1] + EQ_TO_GAL[2][2] * v[2],
    ];
    let (lon, lat) = to_angles(g);
    Galactic { lon, lat }
}

/// Galactic to equatorial (J2000) coordinates.
///
/// Applies the transpose of the forward matrix (orthogonal rotation).
pub fn galactic_to_equatorial(gal: Galactic) -> Equatorial {
    let v = unit_vector(gal.lon, gal.lat);
    let e = [
        EQ_TO_GAL[0][0] * v[0] + EQ_TO_GAL[1][0] * v[1] + EQ_TO_GAL[2][0] * v[2],
        EQ_TO_GAL[0][1] * v[0] + EQ_TO_GAL[1][1] * v[1] + EQ_TO_GAL[2][1] * v[2],
        EQ_TO_GAL[0][2] * v[0] + EQ_TO_GAL[1][2] * v[1] + EQ_TO_GAL[2][2] * v[2],
    ];
    let (ra, dec) = to_angles(e);
    Equatorial { ra, dec }
}
