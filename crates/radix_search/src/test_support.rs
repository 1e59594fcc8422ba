//! Synthetic data-set builders shared by the search tests.

use radix_eph::EphemerisStore;

/// Build a store sampled daily for `days` days from `start_jd`. Each slot
/// closure maps elapsed days to (longitude deg, latitude deg, distance AU).
pub(crate) fn build_store(
    start_jd: f64,
    days: usize,
    slots: &[&dyn Fn(f64) -> (f64, f64, f64)],
) -> EphemerisStore {
    let mut samples = String::new();
    for i in 0..=days {
        let d = i as f64;
        samples.push_str(&format!("{:.1}", start_jd + d));
        for slot in slots {
            let (lon, lat, dist) = slot(d);
            samples.push_str(&format!(" {:.9} {lat:.9} {dist:.6}", lon.rem_euclid(360.0)));
        }
        samples.push('\n');
    }
    EphemerisStore::parse(&samples, "0|Sun|Su|\n1|Moon|Mo|\n").unwrap()
}

/// Sun and Moon on linear tracks, both on the ecliptic.
pub(crate) fn linear_sun_moon_store(
    start_jd: f64,
    days: usize,
    sun0: f64,
    sun_rate: f64,
    moon0: f64,
    moon_rate: f64,
) -> EphemerisStore {
    build_store(
        start_jd,
        days,
        &[
            &move |d| (sun0 + sun_rate * d, 0.0, 1.0),
            &move |d| (moon0 + moon_rate * d, 0.0, 0.0026),
        ],
    )
}
