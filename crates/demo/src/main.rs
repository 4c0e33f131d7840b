use std::time::Instant;

use anyhow::{Context, Result, ensure};
use bounded_sort::{BoundedAlgorithm, algorithm_name, is_sorted_non_decreasing, sort_bounded};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "bounded_sort=info,bounded_sort_demo=info";

/// Sort random bounded-range data and report how long it took.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of elements (n)
    #[arg(short = 'n', long, default_value_t = 1000)]
    len: usize,

    /// Smallest generated value
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min_value: i64,

    /// Largest generated value (defaults to n - 1)
    #[arg(long, allow_negative_numbers = true)]
    max_value: Option<i64>,

    /// RNG seed, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Leading elements printed before and after sorting
    #[arg(long, default_value_t = 10)]
    preview: usize,

    /// Algorithm: reconstruct|counting_buffer
    #[arg(short, long, default_value = "reconstruct")]
    algorithm: BoundedAlgorithm,
}

fn generate(len: usize, min_value: i64, max_value: i64, seed: u64) -> Result<Vec<i64>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    ensure!(
        min_value <= max_value,
        "--min-value {min_value} is greater than --max-value {max_value}"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..len).map(|_| rng.random_range(min_value..=max_value)).collect())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let max_value = args.max_value.unwrap_or(args.len as i64 - 1);
    let name = algorithm_name(args.algorithm);
    info!(
        len = args.len,
        min_value = args.min_value,
        max_value,
        seed,
        algorithm = name,
        "generating input"
    );

    let mut data = generate(args.len, args.min_value, max_value, seed)?;
    let preview = args.preview.min(data.len());
    println!("List before sorting: {:?}", &data[..preview]);

    let start = Instant::now();
    sort_bounded(args.algorithm, &mut data)
        .with_context(|| format!("{name} sort rejected the input"))?;
    let elapsed = start.elapsed();

    println!("List after sorting: {:?}", &data[..preview]);
    println!("Execution time: {:.6} seconds", elapsed.as_secs_f64());

    ensure!(is_sorted_non_decreasing(&data), "{name} produced unsorted output");
    info!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, "verified sorted output");
    Ok(())
}
