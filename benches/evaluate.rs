//! Run these benches with `cargo bench --bench evaluate -- --verbose`
use criterion::{criterion_group, criterion_main, Criterion};
use metfor::{CelsiusDiff, Feet};

mod utils;

fn build_tester() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(std::time::Duration::from_secs(10))
        .noise_threshold(0.03)
        .significance_level(0.01)
}

criterion_main!(evaluate_benches);

criterion_group!(
    name = evaluate_benches;
    config = build_tester();
    targets = evaluate_bench, evaluate_exact_bench, analysis_bench
);

fn evaluate_bench(c: &mut Criterion) {
    let alts = utils::altitudes();
    let devs = utils::deviations();

    c.bench_function("evaluate", |b| {
        b.iter(|| {
            for &alt in &alts {
                for &dev in &devs {
                    let _x = isa_analysis::evaluate(alt, dev);
                }
            }
        });
    });
}

fn evaluate_exact_bench(c: &mut Criterion) {
    let alts = utils::altitudes();
    let devs = utils::deviations();

    c.bench_function("evaluate_exact", |b| {
        b.iter(|| {
            for &alt in &alts {
                for &dev in &devs {
                    let _x = isa_analysis::evaluate_exact(alt, dev);
                }
            }
        });
    });
}

fn analysis_bench(c: &mut Criterion) {
    let devs = utils::deviations();

    c.bench_function("analysis", |b| {
        b.iter(|| {
            for &dev in &devs {
                let anal = isa_analysis::Analysis::new(Feet(35_000.0), dev);
                let _x = anal.density_altitude_alert();
                let _y = anal.low_temperature_alert();
            }
        });
    });

    c.bench_function("analysis_standard", |b| {
        b.iter(|| isa_analysis::Analysis::new(Feet(10_000.0), CelsiusDiff(0.0)));
    });
}
