use clap::{Parser, Subcommand};
use flowtag_core::cli;
use flowtag_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "flowtag",
    version,
    about = "Flowtag: tag flow-log records by destination port and protocol"
)]
struct Cli {
    /// Diagnostic output format (always written to stderr)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tag a flow log and write tag and port/protocol counts
    Analyze(cli::analyze::AnalyzeArgs),

    /// Validate the lookup and protocol tables and exit
    Check(cli::check::CheckArgs),

    /// Generate a synthetic lookup table and flow log
    Generate(cli::generate::GenerateArgs),
}

fn main() {
    let args = Cli::parse();

    init_logging(args.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(args.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze(args) => cli::analyze::run(args),
        Command::Check(args) => cli::check::check(args),
        Command::Generate(args) => cli::generate::run(args),
    }
}
