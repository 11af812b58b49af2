use crate::analysis::AnalysisSession;
use crate::cli::TableArgs;
use crate::conf::resolve_config;
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Lookup table CSV (dstport,protocol,tag)
    pub lookup: PathBuf,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub lookup: PathBuf,
    pub lookup_entries: usize,
    pub distinct_tags: usize,
    pub protocol_source: String,
    pub protocol_entries: usize,
    pub max_input_bytes: u64,
}

impl TableSummary {
    pub fn from_session(session: &AnalysisSession, lookup: &Path) -> Self {
        Self {
            lookup: lookup.to_path_buf(),
            lookup_entries: session.lookup().len(),
            distinct_tags: session.lookup().distinct_tags(),
            protocol_source: session.protocols().source().to_string(),
            protocol_entries: session.protocols().len(),
            max_input_bytes: session.config().max_input_bytes,
        }
    }
}

/// Load both tables without reading a flow log.
pub fn check(args: CheckArgs) -> Result<()> {
    let cfg = resolve_config(args.tables.config.as_deref())?
        .with_overrides(None, args.tables.protocol_mappings);
    let session = AnalysisSession::open(cfg, &args.lookup)?;
    let summary = TableSummary::from_session(&session, &args.lookup);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &TableSummary) {
    let ok = "✔".green();
    println!("{ok} Lookup table {} loaded", summary.lookup.display());
    println!(
        "{ok} {} entries, {} distinct tags",
        summary.lookup_entries, summary.distinct_tags
    );
    println!(
        "{ok} {} protocol mappings ({})",
        summary.protocol_entries, summary.protocol_source
    );
    println!("{ok} max flow log size {} bytes", summary.max_input_bytes);
}
