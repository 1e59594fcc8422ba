use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_core::Body;
use radix_eph::EphemerisStore;
use radix_search::{find_nearest_station, find_next_lunar_phase, LunarPhase, SearchConfig};

const J2000: f64 = 2_451_545.0;

/// Ten years of daily samples: linear Sun and Moon, Mars with a sinusoidal
/// retrograde wobble.
fn synthetic_store() -> EphemerisStore {
    let mut samples = String::new();
    for i in 0..3650 {
        let d = i as f64;
        let sun = (280.0 + 0.9856 * d).rem_euclid(360.0);
        let moon = (13.1764 * d).rem_euclid(360.0);
        let mercury = (40.0 + 1.2 * d).rem_euclid(360.0);
        let venus = (70.0 + 1.1 * d).rem_euclid(360.0);
        let mars = (140.0 + 0.524 * d + 10.0 * (std::f64::consts::TAU * d / 780.0).sin())
            .rem_euclid(360.0);
        samples.push_str(&format!(
            "{:.1} {sun:.6} 0.0 1.0 {moon:.6} 1.1 0.0026 {mercury:.6} 0.2 0.9 {venus:.6} 0.4 0.7 {mars:.6} 0.8 1.5\n",
            J2000 + d
        ));
    }
    EphemerisStore::parse(&samples, "0|Sun|Su|\n1|Moon|Mo|\n").unwrap()
}

fn bench_search(c: &mut Criterion) {
    let store = synthetic_store();
    let config = SearchConfig::default();

    c.bench_function("next_new_moon", |b| {
        b.iter(|| {
            find_next_lunar_phase(
                &store,
                black_box(J2000 + 100.0),
                LunarPhase::NewMoon,
                &config,
            )
        })
    });

    c.bench_function("nearest_mars_station", |b| {
        b.iter(|| find_nearest_station(&store, Body::Mars, black_box(J2000 + 400.0), &config))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
