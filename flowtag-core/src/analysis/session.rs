use crate::analysis::error::AnalysisError;
use crate::conf::AnalyzerConfig;
use crate::lookup::LookupTable;
use crate::protocol::ProtocolTable;
use crate::report::{render_report, write_report};
use crate::stats::{FlowStats, StatsAggregator};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Tables and limits shared read-only by every line of one run.
#[derive(Debug)]
pub struct AnalysisSession {
    config: AnalyzerConfig,
    protocols: ProtocolTable,
    lookup: LookupTable,
}

impl AnalysisSession {
    /// Build the protocol table, then the lookup table that depends on it.
    pub fn open(config: AnalyzerConfig, lookup_path: &Path) -> Result<Self, AnalysisError> {
        let protocols = ProtocolTable::load(&config.protocol_mappings);
        let lookup = LookupTable::load(lookup_path, &protocols)?;

        Ok(Self::new(config, protocols, lookup))
    }

    pub fn new(config: AnalyzerConfig, protocols: ProtocolTable, lookup: LookupTable) -> Self {
        Self {
            config,
            protocols,
            lookup,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn protocols(&self) -> &ProtocolTable {
        &self.protocols
    }

    pub fn lookup(&self) -> &LookupTable {
        &self.lookup
    }

    /// Size admission check. Runs before any line is read.
    pub fn admit(&self, input: &Path) -> Result<u64, AnalysisError> {
        let size = fs::metadata(input)
            .map_err(|e| AnalysisError::read_input(input, e))?
            .len();

        if size > self.config.max_input_bytes {
            return Err(AnalysisError::InputTooLarge {
                path: input.to_path_buf(),
                size,
                limit: self.config.max_input_bytes,
            });
        }

        Ok(size)
    }

    pub fn analyze(&self, input: &Path) -> Result<FlowStats, AnalysisError> {
        let size = self.admit(input)?;
        tracing::info!(path = %input.display(), bytes = size, "analyzing flow log");

        let file = File::open(input).map_err(|e| AnalysisError::read_input(input, e))?;
        let mut aggregator = StatsAggregator::new(&self.protocols, &self.lookup);

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| AnalysisError::read_input(input, e))?;
            aggregator.push(&line);
        }

        let stats = aggregator.finish();
        if stats.lines_skipped > 0 {
            tracing::warn!(
                skipped = stats.lines_skipped,
                lines = stats.lines_seen,
                "some flow log lines were invalid and skipped"
            );
        }

        Ok(stats)
    }

    /// Classify in-memory lines with this session's tables.
    pub fn analyze_lines<I, S>(&self, lines: I) -> FlowStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StatsAggregator::new(&self.protocols, &self.lookup).process(lines)
    }
}

/// Load tables, aggregate `input` and write the report to `output`. The
/// output file is only created once everything before it succeeded.
pub fn run_analysis(
    config: AnalyzerConfig,
    lookup: &Path,
    input: &Path,
    output: &Path,
) -> Result<FlowStats, AnalysisError> {
    let session = AnalysisSession::open(config, lookup)?;
    let stats = session.analyze(input)?;

    let report = render_report(&stats.tag_counts, &stats.combo_counts);
    write_report(output, &report).map_err(|source| AnalysisError::WriteReport {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        output = %output.display(),
        records = stats.records(),
        skipped = stats.lines_skipped,
        "analysis complete"
    );

    Ok(stats)
}
