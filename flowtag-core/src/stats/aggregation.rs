use crate::flowlog::parse_record;
use crate::lookup::{LookupTable, TagKey};
use crate::protocol::ProtocolTable;
use std::collections::HashMap;

pub type TagCounts = HashMap<String, u64>;
pub type ComboCounts = HashMap<TagKey, u64>;

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowStats {
    pub tag_counts: TagCounts,
    pub combo_counts: ComboCounts,
    pub lines_seen: u64,
    pub lines_skipped: u64,
}

impl FlowStats {
    /// Lines that parsed and were counted.
    pub fn records(&self) -> u64 {
        self.lines_seen - self.lines_skipped
    }

    /// Fold another partition's totals into this one. Counts only add, so the
    /// result does not depend on how lines were partitioned.
    pub fn merge(&mut self, other: FlowStats) {
        for (tag, count) in other.tag_counts {
            *self.tag_counts.entry(tag).or_insert(0) += count;
        }
        for (key, count) in other.combo_counts {
            *self.combo_counts.entry(key).or_insert(0) += count;
        }
        self.lines_seen += other.lines_seen;
        self.lines_skipped += other.lines_skipped;
    }
}

/// Single-pass classifier over raw flow-log lines.
pub struct StatsAggregator<'a> {
    protocols: &'a ProtocolTable,
    lookup: &'a LookupTable,
    stats: FlowStats,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(protocols: &'a ProtocolTable, lookup: &'a LookupTable) -> Self {
        Self {
            protocols,
            lookup,
            stats: FlowStats::default(),
        }
    }

    pub fn push(&mut self, line: &str) {
        self.stats.lines_seen += 1;

        let key = match parse_record(line, self.protocols) {
            Ok(key) => key,
            Err(e) => {
                self.stats.lines_skipped += 1;
                tracing::warn!(
                    line = self.stats.lines_seen,
                    reason = %e,
                    "skipping invalid line"
                );
                return;
            }
        };

        let tag = self.lookup.classify(&key);
        match self.stats.tag_counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                self.stats.tag_counts.insert(tag.to_string(), 1);
            }
        }
        *self.stats.combo_counts.entry(key).or_insert(0) += 1;
    }

    pub fn process<I, S>(mut self, lines: I) -> FlowStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push(line.as_ref());
        }
        self.finish()
    }

    pub fn finish(self) -> FlowStats {
        tracing::debug!(
            lines = self.stats.lines_seen,
            skipped = self.stats.lines_skipped,
            tags = self.stats.tag_counts.len(),
            combinations = self.stats.combo_counts.len(),
            "aggregation finished"
        );
        self.stats
    }
}
