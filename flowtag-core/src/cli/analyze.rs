use crate::analysis::run_analysis;
use crate::cli::TableArgs;
use crate::conf::resolve_config;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Lookup table CSV (dstport,protocol,tag)
    pub lookup: PathBuf,

    /// Flow log file (version 2 records)
    pub flow_log: PathBuf,

    /// Report destination
    pub output: PathBuf,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Reject flow logs larger than this many bytes
    #[arg(long)]
    pub max_input_bytes: Option<u64>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let cfg = resolve_config(args.tables.config.as_deref())?
        .with_overrides(args.max_input_bytes, args.tables.protocol_mappings);

    run_analysis(cfg, &args.lookup, &args.flow_log, &args.output)?;

    println!(
        "Analysis complete. Results written to {}",
        args.output.display()
    );
    Ok(())
}
