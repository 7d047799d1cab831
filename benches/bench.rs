use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use num_complex::Complex;
use stagefft::{fft, fft_multithreaded, hardware_concurrency};
use utilities::gen_random_signal;
use utilities::rustfft::FftPlanner;

const LENGTHS: &[usize] = &[
    6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
];

fn generate_signal(n: usize) -> Vec<Complex<f64>> {
    let mut signal = vec![Complex::default(); n];
    gen_random_signal(&mut signal);
    signal
}

fn benchmark_forward_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64");
    let num_threads = hardware_concurrency();

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("Single-threaded", len), |b| {
            b.iter_batched(
                || generate_signal(len),
                |mut signal| fft(&mut signal),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("Multithreaded", len), |b| {
            b.iter_batched(
                || generate_signal(len),
                |mut signal| fft_multithreaded(&mut signal, num_threads),
                BatchSize::SmallInput,
            );
        });

        let mut planner = FftPlanner::<f64>::new();
        let rustfft = planner.plan_fft_forward(len);

        group.bench_function(BenchmarkId::new("RustFFT", len), |b| {
            b.iter_batched(
                || generate_signal(len),
                |mut signal| {
                    rustfft.process(&mut signal);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thread scaling");
    let len = 1 << 18;
    group.throughput(Throughput::Elements(len as u64));

    for num_threads in 1..=hardware_concurrency() {
        group.bench_function(BenchmarkId::new("Multithreaded", num_threads), |b| {
            b.iter_batched(
                || generate_signal(len),
                |mut signal| fft_multithreaded(&mut signal, num_threads),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_forward_f64, benchmark_thread_scaling);
criterion_main!(benches);
