use criterion::{Criterion, black_box, criterion_group, criterion_main};

use panch_ephemeris::{Ayanamsa, Body};
use panch_events::{
    ascendant_flips, combustion_windows, nakshatra_pada_changes, sign_ingresses, stations,
    velocity_extrema,
};
use panch_time::Instant;

fn month_window() -> (Instant, Instant) {
    let start = Instant::from_utc_ymd_hms(2024, 3, 1, 0, 0, 0.0);
    (start, start.plus_seconds(31.0 * 86_400.0))
}

fn ingress_bench(c: &mut Criterion) {
    let (start, end) = month_window();
    c.bench_function("sign_ingresses_moon", |b| {
        b.iter(|| sign_ingresses(black_box(Body::Moon), Ayanamsa::Lahiri, start, end))
    });
}

fn ascendant_bench(c: &mut Criterion) {
    let (start, end) = month_window();
    c.bench_function("ascendant_flips_one_day", |b| {
        b.iter(|| {
            ascendant_flips(
                black_box(19.076),
                black_box(72.877),
                Ayanamsa::Lahiri,
                start,
                start.plus_seconds(86_400.0),
            )
        })
    });
    let _ = end;
}

fn nakshatra_bench(c: &mut Criterion) {
    let (start, end) = month_window();
    c.bench_function("nakshatra_pada_changes_month", |b| {
        b.iter(|| nakshatra_pada_changes(Ayanamsa::Lahiri, black_box(start), end))
    });
}

fn station_bench(c: &mut Criterion) {
    let start = Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0);
    let end = start.plus_seconds(365.0 * 86_400.0);
    c.bench_function("stations_mercury_year", |b| {
        b.iter(|| stations(black_box(Body::Mercury), Ayanamsa::Lahiri, start, end))
    });
}

fn combustion_bench(c: &mut Criterion) {
    let start = Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0);
    let end = start.plus_seconds(365.0 * 86_400.0);
    c.bench_function("combustion_windows_mercury_year", |b| {
        b.iter(|| combustion_windows(black_box(Body::Mercury), Ayanamsa::Lahiri, start, end))
    });
}

fn velocity_bench(c: &mut Criterion) {
    let start = Instant::from_utc_ymd_hms(2024, 1, 1, 0, 0, 0.0);
    let end = start.plus_seconds(180.0 * 86_400.0);
    c.bench_function("velocity_extrema_mercury_half_year", |b| {
        b.iter(|| velocity_extrema(black_box(Body::Mercury), Ayanamsa::Lahiri, start, end))
    });
}

criterion_group!(
    benches,
    ingress_bench,
    ascendant_bench,
    nakshatra_bench,
    station_bench,
    combustion_bench,
    velocity_bench
);
criterion_main!(benches);
