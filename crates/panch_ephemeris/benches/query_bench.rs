use criterion::{Criterion, black_box, criterion_group, criterion_main};

use panch_ephemeris::{Ayanamsa, Body, ascendant, longitude, longitude_and_speed};
use panch_time::Instant;

fn j2000_noon() -> Instant {
    Instant::from_utc_ymd_hms(2000, 1, 1, 12, 0, 0.0)
}

fn longitude_bench(c: &mut Criterion) {
    let instant = j2000_noon();

    let mut group = c.benchmark_group("longitude");
    group.bench_function("moon_lahiri", |b| {
        b.iter(|| longitude(black_box(Body::Moon), instant, Ayanamsa::Lahiri))
    });
    group.bench_function("mars_tropical", |b| {
        b.iter(|| longitude(black_box(Body::Mars), instant, Ayanamsa::Tropical))
    });
    group.bench_function("rahu_lahiri", |b| {
        b.iter(|| longitude(black_box(Body::Rahu), instant, Ayanamsa::Lahiri))
    });
    group.finish();
}

fn longitude_and_speed_bench(c: &mut Criterion) {
    let instant = j2000_noon();

    let mut group = c.benchmark_group("longitude_and_speed");
    for &body in Body::all() {
        group.bench_function(format!("{body:?}"), |b| {
            b.iter(|| longitude_and_speed(black_box(body), instant, Ayanamsa::Lahiri))
        });
    }
    group.finish();
}

fn ascendant_bench(c: &mut Criterion) {
    let instant = j2000_noon();

    c.bench_function("ascendant_mumbai", |b| {
        b.iter(|| ascendant(instant, black_box(19.076), black_box(72.877), Ayanamsa::Lahiri))
    });
}

criterion_group!(benches, longitude_bench, longitude_and_speed_bench, ascendant_bench);
criterion_main!(benches);
