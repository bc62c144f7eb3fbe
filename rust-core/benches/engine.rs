use criterion::{black_box, criterion_group, criterion_main, Criterion};
use adaptive_fir::identification::UniformSource;
use adaptive_fir::{AdaptiveFilterEngine, EngineConfig};

fn run_engine_benchmark(id: &str, c: &mut Criterion, taps: usize) {
    let mut engine = AdaptiveFilterEngine::zeroed(taps, &EngineConfig::default()).unwrap();
    let mut source = UniformSource::new(824, -1.0, 1.0).unwrap();
    let input = source.take_vec(1024);

    c.bench_function(id, |b| {
        b.iter(|| {
            for &x in input.iter() {
                black_box(engine.run(black_box(x), black_box(0.5 * x)));
            }
        })
    });
}

fn run_error_in_benchmark(id: &str, c: &mut Criterion, taps: usize) {
    let mut engine = AdaptiveFilterEngine::zeroed(taps, &EngineConfig::default()).unwrap();
    let mut source = UniformSource::new(824, -1.0, 1.0).unwrap();
    let input = source.take_vec(1024);

    c.bench_function(id, |b| {
        b.iter(|| {
            for &x in input.iter() {
                black_box(engine.run_error_in(black_box(x), black_box(1e-3)));
            }
        })
    });
}

fn engine_benchmarks(c: &mut Criterion) {
    run_engine_benchmark("run, 30 taps x 1024", c, 30);
    run_engine_benchmark("run, 128 taps x 1024", c, 128);
    run_engine_benchmark("run, 512 taps x 1024", c, 512);

    run_error_in_benchmark("run_error_in, 30 taps x 1024", c, 30);
    run_error_in_benchmark("run_error_in, 512 taps x 1024", c, 512);
}

criterion_group!(benches, engine_benchmarks);
criterion_main!(benches);
