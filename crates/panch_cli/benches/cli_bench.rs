use criterion::{Criterion, black_box, criterion_group, criterion_main};

use panch_ephemeris::Ayanamsa;
use panch_orchestrator::compute_monthly;

fn monthly_end_to_end_bench(c: &mut Criterion) {
    c.bench_function("cli_monthly_mumbai_march", |b| {
        b.iter(|| {
            compute_monthly(
                black_box(19.076),
                black_box(72.877),
                "Asia/Kolkata",
                "2024-03-01",
                Ayanamsa::Lahiri,
            )
        })
    });
}

criterion_group!(benches, monthly_end_to_end_bench);
criterion_main!(benches);
