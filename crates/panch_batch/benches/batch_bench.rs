use criterion::{Criterion, black_box, criterion_group, criterion_main};

use panch_batch::BatchExecutor;
use panch_ephemeris::Ayanamsa;

fn batch_bench(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let executor = BatchExecutor::new(3600, None, 6);
    let months = vec!["2024-03-01".to_string(), "2024-04-01".to_string()];

    c.bench_function("compute_months_two_misses", |b| {
        b.iter(|| {
            rt.block_on(executor.compute_months(
                black_box(19.076),
                black_box(72.877),
                "Asia/Kolkata",
                &months,
                Ayanamsa::Lahiri,
            ))
        })
    });
}

criterion_group!(benches, batch_bench);
criterion_main!(benches);
