use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use qdim::{Imperial, Length, Si, Time, Velocity};

fn bench_dimensioned_vs_raw(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensioned_vs_raw");

    let si = Si::default();
    let imperial = Imperial::new(&si);

    group.bench_function("typed_velocity", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let distance: Length = imperial.mile * (i as f64);
                let time: Time = si.second * 30.0;
                let speed: Velocity = distance / time;
                black_box(speed);
            }
        });
    });

    group.bench_function("raw_velocity", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let distance = 1609.3439941 * (i as f64);
                let time = 30.0;
                black_box(distance / time);
            }
        });
    });

    group.finish();
}

fn bench_unit_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_conversion");

    let si = Si::default();
    let imperial = Imperial::new(&si);
    let kilometre = si.kilo * si.meter;

    group.bench_function("mile_to_kilometre", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let miles = imperial.mile * (i as f64);
                black_box(f64::from(miles / kilometre));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dimensioned_vs_raw, bench_unit_conversion);
criterion_main!(benches);
