use std::env;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use stagefft::{fft_with_opts, FftError, Options};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utilities::gen_seeded_real_signal;

/// Transform sizes timed by both runs
const INPUT_SIZES: &[usize] = &[
    32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536, 131072, 262144, 524288,
    1048576,
];

const SEED: u64 = 1234;

/// Times one transform per input size and returns `(size, elapsed ms)` pairs.
fn run_benchmark(opts: &Options) -> Result<Vec<(usize, f64)>, FftError> {
    INPUT_SIZES
        .iter()
        .map(|&size| {
            let samples = gen_seeded_real_signal(size, SEED, -1000.0, 1000.0);
            let mut data = stagefft::complex_from_reals(&samples);

            let now = Instant::now();
            fft_with_opts(&mut data, opts)?;
            let elapsed = now.elapsed().as_secs_f64() * 1e3;

            info!(size, elapsed_ms = elapsed, "transform finished");
            Ok((size, elapsed))
        })
        .collect()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let num_threads = match args.get(1).map(|arg| usize::from_str(arg)) {
        None => 0,
        Some(Ok(num_threads)) => num_threads,
        Some(Err(err)) => {
            error!(%err, "Usage {} [num_threads]", args[0]);
            return ExitCode::FAILURE;
        }
    };

    info!("running single-threaded benchmark");
    let single = match run_benchmark(&Options::single_threaded()) {
        Ok(single) => single,
        Err(err) => {
            error!(%err, "single-threaded benchmark failed");
            return ExitCode::FAILURE;
        }
    };

    let opts = Options::multithreaded(num_threads);
    info!(
        threads = opts.resolved_threads(),
        "running multithreaded benchmark"
    );
    let multi = match run_benchmark(&opts) {
        Ok(multi) => multi,
        Err(err) => {
            error!(%err, "multithreaded benchmark failed");
            return ExitCode::FAILURE;
        }
    };

    println!("Input_Size,Single_ms,Multi_ms");
    for ((size, single_ms), (_, multi_ms)) in single.iter().zip(multi.iter()) {
        println!("{size},{single_ms:.4},{multi_ms:.4}");
    }

    ExitCode::SUCCESS
}
