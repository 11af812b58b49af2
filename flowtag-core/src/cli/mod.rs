pub mod analyze;
pub mod check;
pub mod generate;

use clap::Args;
use std::path::PathBuf;

/// Where the run's settings and protocol table come from.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Protocol mapping CSV (protocol_number,protocol_name); overrides the config file
    #[arg(long)]
    pub protocol_mappings: Option<PathBuf>,
}
