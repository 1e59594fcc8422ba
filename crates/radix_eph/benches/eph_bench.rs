use criterion::{Criterion, black_box, criterion_group, criterion_main};
use radix_eph::EphemerisStore;
use std::fmt::Write as _;

fn synthetic_store(days: usize) -> EphemerisStore {
    let mut samples = String::new();
    for d in 0..days {
        let jd = 2_451_545.0 + d as f64;
        let lon = (d as f64 * 0.9856) % 360.0;
        writeln!(samples, "{jd} {lon} 0.0 1.0").unwrap();
    }
    EphemerisStore::parse(&samples, "0|Sun|SU|The Sun\n").unwrap()
}

fn interpolation_bench(c: &mut Criterion) {
    let store = synthetic_store(3650);

    c.bench_function("values_at_interpolated", |b| {
        b.iter(|| store.values_at(black_box(2_451_545.0 + 1234.37)))
    });
    c.bench_function("body_position", |b| {
        b.iter(|| store.body_position(black_box(0), black_box(2_451_545.0 + 1234.37)))
    });
}

criterion_group!(benches, interpolation_bench);
criterion_main!(benches);
