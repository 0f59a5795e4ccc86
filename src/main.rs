//! Demo runner: the 3×3 product, then timings by split count.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use block_matmul::{Matrix, Result, multiply, multiply_naive, multiply_split};
use log::{LevelFilter, Log, Metadata, Record, error};

const LOG_ENV: &str = "BLOCK_MATMUL_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    init_logging();

    let product = match demo_product() {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("{}", product);
    println!();

    match bench_split_counts() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// The fixed 3×3 example, one block per cell.
fn demo_product() -> Result<Matrix> {
    let a = Matrix::from_rows(vec![vec![1, 2, -1], vec![0, 2, 1], vec![1, 1, 1]])?;
    let b = Matrix::from_rows(vec![vec![0, 2, 1], vec![1, 1, 1], vec![1, 2, -1]])?;
    multiply(&a, &b, 1)
}

/// Times a random 150×150 product for several split counts against the
/// naive baseline. Returns `Ok(false)` if any result disagrees with it.
fn bench_split_counts() -> Result<bool> {
    let size = 150;
    let mut rng = rand::thread_rng();
    let a = Matrix::random(size, 0..=9, &mut rng)?;
    let b = Matrix::random(size, 0..=9, &mut rng)?;

    println!("=== Block Multiplication {}×{} ===", size, size);
    println!("{}", "-".repeat(50));

    let start = Instant::now();
    let expected = multiply_naive(&a, &b)?;
    let naive_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut all_match = true;
    for splits in [10, 5, 2, 1] {
        let start = Instant::now();
        let c = multiply_split(&a, &b, splits)?;
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let status = if c == expected { "ok" } else { "MISMATCH" };
        if c != expected {
            error!("split count {} disagrees with the naive product", splits);
            all_match = false;
        }

        println!(
            "{:>3} splits ({:>3} blocks of {:>3}×{:<3}) {:8.2} ms  {}",
            splits,
            splits * splits,
            size / splits,
            size / splits,
            time_ms,
            status
        );
    }
    println!("{:<32} {:8.2} ms", "Naive (i-j-k)", naive_ms);

    Ok(all_match)
}
