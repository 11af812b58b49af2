mod aggregation;

#[cfg(test)]
mod tests;

pub use aggregation::{ComboCounts, FlowStats, StatsAggregator, TagCounts};
