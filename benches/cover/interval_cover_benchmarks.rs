use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use intercover::{minimum_cover, minimum_cover_serial, CoverConfig, IntervalCover};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Steps in 5..=15 and lengths in 20..=24: strictly increasing, no gaps.
fn generate_intervals(n: usize, seed: u64) -> Vec<(i64, i64)> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let steps = Uniform::new_inclusive(5i64, 15);
    let lens = Uniform::new_inclusive(20i64, 24);
    let mut left = 0;
    (0..n)
        .map(|_| {
            left += steps.sample(&mut rng);
            (left, left + lens.sample(&mut rng))
        })
        .collect()
}

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_cover");
    for &k in &[16usize, 20, 22] {
        let n = 1usize << k;
        let iv = generate_intervals(n, 42);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("serial", format!("2^{k}")), |b| {
            b.iter(|| minimum_cover_serial(black_box(n), |i| iv[i].0, |i| iv[i].1))
        });
        group.bench_function(BenchmarkId::new("parallel", format!("2^{k}")), |b| {
            b.iter(|| minimum_cover(black_box(n), |i| iv[i].0, |i| iv[i].1))
        });
    }
    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let n = 1usize << 20;
    let iv = generate_intervals(n, 42);
    let solver = || IntervalCover::new(n, |i| iv[i].0, |i| iv[i].1);

    let mut group = c.benchmark_group("phases_2^20");
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("furthest_reach", |b| {
        b.iter_batched(
            solver,
            |mut s| {
                s.compute_furthest().unwrap();
                s
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("sample_landmarks", |b| {
        b.iter_batched(
            solver,
            |mut s| {
                s.sample_landmarks();
                s
            },
            BatchSize::LargeInput,
        )
    });

    let prepared = || {
        let mut s = solver();
        s.compute_furthest().unwrap();
        s.sample_landmarks();
        s
    };
    group.bench_function("link_landmarks", |b| {
        b.iter_batched(
            prepared,
            |mut s| {
                s.link_landmarks();
                s
            },
            BatchSize::LargeInput,
        )
    });

    let linked = || {
        let mut s = prepared();
        s.link_landmarks();
        s
    };
    group.bench_function("scan_and_expand", |b| {
        b.iter_batched(
            linked,
            |mut s| {
                s.scan_landmark_chain();
                s.expand_chain().unwrap();
                s
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_thread_scaling(c: &mut Criterion) {
    let n = 1usize << 20;
    let iv = generate_intervals(n, 7);
    let config = CoverConfig::default();

    let mut group = c.benchmark_group("thread_scaling_2^20");
    group.throughput(Throughput::Elements(n as u64));
    let max_threads = std::thread::available_parallelism().map_or(1, |p| p.get());
    let mut threads = 1;
    while threads <= max_threads {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("thread pool");
        group.bench_function(BenchmarkId::from_parameter(threads), |b| {
            b.iter(|| {
                pool.install(|| {
                    intercover::minimum_cover_with(n, |i| iv[i].0, |i| iv[i].1, &config)
                })
            })
        });
        threads *= 2;
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_serial_vs_parallel,
    bench_phases,
    bench_thread_scaling
);
criterion_main!(benches);
