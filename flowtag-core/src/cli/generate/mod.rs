//! Synthetic data for load testing: a lookup table and a flow log of at least
//! a given size, both in the formats `analyze` consumes.

mod constants;
mod generator;


pub use generator::{FlowLogGenerator, GeneratedLog};

use anyhow::{Context, Result, bail};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of lookup rows to generate
    #[arg(long, default_value_t = 11_000)]
    pub lookup_entries: usize,

    /// Lookup table destination
    #[arg(long, default_value = "large_lookup.csv")]
    pub lookup_out: PathBuf,

    /// Minimum flow log size in MiB
    #[arg(long, default_value_t = 12)]
    pub flow_log_mb: u64,

    /// Flow log destination
    #[arg(long, default_value = "large_flow_log_data.txt")]
    pub flow_log_out: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = FlowLogGenerator::new(rng);

    tracing::info!(entries = args.lookup_entries, "generating lookup table");
    let started = Instant::now();
    let file = File::create(&args.lookup_out)
        .with_context(|| format!("cannot create {}", args.lookup_out.display()))?;
    generator.write_lookup_table(args.lookup_entries, BufWriter::new(file))?;
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "lookup table generated"
    );

    let min_bytes = flow_log_target_bytes(args.flow_log_mb)?;
    tracing::info!(min_mb = args.flow_log_mb, "generating flow log");
    let started = Instant::now();
    let file = File::create(&args.flow_log_out)
        .with_context(|| format!("cannot create {}", args.flow_log_out.display()))?;
    let log = generator.write_flow_log(min_bytes, BufWriter::new(file))?;
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        lines = log.lines,
        bytes = log.bytes,
        "flow log generated"
    );

    let lookup_size = fs::metadata(&args.lookup_out)?.len();
    let flow_size = fs::metadata(&args.flow_log_out)?.len();
    println!("Generated files:");
    println!(
        "Lookup table: {} ({:.2}MB)",
        args.lookup_out.display(),
        lookup_size as f64 / 1024.0 / 1024.0
    );
    println!(
        "Flow log: {} ({:.2}MB, {} lines)",
        args.flow_log_out.display(),
        flow_size as f64 / 1024.0 / 1024.0,
        log.lines
    );

    Ok(())
}

fn flow_log_target_bytes(mb: u64) -> Result<u64> {
    match mb.checked_mul(1024 * 1024) {
        Some(bytes) => Ok(bytes),
        None => bail!("--flow-log-mb {mb} is too large"),
    }
}
