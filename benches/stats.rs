use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use sincheck::{reference_sin, Distribution, ErrorStats, Evaluator};

const PREC: u32 = 512;

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("welford");
    let reference = reference_sin(0.9f32, PREC);
    let observed = Evaluator::Double.evaluate(0.9f32, PREC);
    group.bench_function("record", |b| {
        let mut stats = ErrorStats::new(Distribution::BiasedSmall, Evaluator::Double, PREC);
        b.iter(|| stats.record(black_box(&observed), black_box(&reference)));
    });
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    for dist in Distribution::ALL {
        group.bench_function(dist.name(), |b| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(1111);
            b.iter(|| black_box(dist.sample(&mut rng)));
        });
    }
    group.finish();
}

fn bench_evaluators(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for ev in Evaluator::ALL {
        group.bench_function(ev.name(), |b| {
            b.iter(|| black_box(ev.evaluate(black_box(0.9f32), PREC)));
        });
    }
    group.bench_function("reference", |b| {
        b.iter(|| black_box(reference_sin(black_box(0.9f32), PREC)));
    });
    group.finish();
}

fn bench_full_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.bench_function("one_sample_all_tiers", |b| {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1111);
        let mut cells: Vec<ErrorStats> = Evaluator::ALL
            .iter()
            .map(|&ev| ErrorStats::new(Distribution::UniformSmall, ev, PREC))
            .collect();
        b.iter(|| {
            let x = Distribution::UniformSmall.sample(&mut rng);
            let reference = reference_sin(x, PREC);
            for (cell, ev) in cells.iter_mut().zip(Evaluator::ALL) {
                let observed = ev.evaluate(x, PREC);
                cell.record(&observed, &reference);
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_record,
    bench_sampling,
    bench_evaluators,
    bench_full_iteration
);
criterion_main!(benches);
