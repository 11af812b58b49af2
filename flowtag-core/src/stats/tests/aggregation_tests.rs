use crate::lookup::{LookupTable, TagKey};
use crate::protocol::ProtocolTable;
use crate::stats::{FlowStats, StatsAggregator};
use std::path::Path;

fn record(dstport: u32, protocol: &str) -> String {
    format!(
        "2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 {dstport} {protocol} 25 20000 1620140761 1620140821 ACCEPT OK"
    )
}

fn lookup(protocols: &ProtocolTable) -> LookupTable {
    let csv = "dstport,protocol,tag\n443,tcp,sv_P2\n23,tcp,sv_P1\n25,tcp,sv_P1\n";
    LookupTable::from_csv(csv.as_bytes(), Path::new("lookup.csv"), protocols).unwrap()
}

fn aggregate(lines: &[String]) -> FlowStats {
    let protocols = ProtocolTable::builtin();
    let lookup = lookup(&protocols);
    StatsAggregator::new(&protocols, &lookup).process(lines)
}

fn mixed_input() -> Vec<String> {
    vec![
        record(443, "6"),
        record(23, "tcp"),
        "garbage".to_string(),
        record(25, "6"),
        record(53, "17"),
        record(70000, "6"),
        record(443, "6"),
        record(80, "gre"),
        record(0, "1"),
        String::new(),
    ]
}

#[test]
fn tags_and_combinations_are_counted() {
    // Arrange
    let lines = vec![record(443, "6"), record(23, "6"), record(25, "6")];

    // Act
    let stats = aggregate(&lines);

    // Assert
    assert_eq!(stats.tag_counts.len(), 2);
    assert_eq!(stats.tag_counts["sv_P1"], 2);
    assert_eq!(stats.tag_counts["sv_P2"], 1);
    assert_eq!(stats.combo_counts.len(), 3);
    assert_eq!(stats.combo_counts[&TagKey::new(23, "tcp")], 1);
    assert_eq!(stats.combo_counts[&TagKey::new(25, "tcp")], 1);
    assert_eq!(stats.combo_counts[&TagKey::new(443, "tcp")], 1);
}

#[test]
fn repeated_tags_accumulate_on_one_entry() {
    let lines: Vec<String> = (0..50).map(|_| record(443, "6")).collect();

    let stats = aggregate(&lines);

    assert_eq!(stats.tag_counts.len(), 1);
    assert_eq!(stats.tag_counts["sv_P2"], 50);
    assert_eq!(stats.combo_counts[&TagKey::new(443, "tcp")], 50);
}

#[test]
fn unmatched_records_count_as_untagged() {
    let stats = aggregate(&[record(49153, "6"), record(443, "17")]);

    assert_eq!(stats.tag_counts["Untagged"], 2);
    assert_eq!(stats.combo_counts[&TagKey::new(49153, "tcp")], 1);
    assert_eq!(stats.combo_counts[&TagKey::new(443, "udp")], 1);
}

#[test]
fn invalid_lines_are_skipped_from_both_counters() {
    // Act
    let stats = aggregate(&mixed_input());

    // Assert
    assert_eq!(stats.lines_seen, 10);
    assert_eq!(stats.lines_skipped, 4);
    assert_eq!(stats.records(), 6);
    assert!(!stats.combo_counts.contains_key(&TagKey::new(80, "gre")));
}

#[test]
fn both_counters_agree_on_totals() {
    let stats = aggregate(&mixed_input());

    let tag_total: u64 = stats.tag_counts.values().sum();
    let combo_total: u64 = stats.combo_counts.values().sum();

    assert_eq!(tag_total, stats.records());
    assert_eq!(combo_total, stats.records());
}

#[test]
fn counts_do_not_depend_on_line_order() {
    let forward = mixed_input();
    let mut backward = forward.clone();
    backward.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(3);

    let expected = aggregate(&forward);

    assert_eq!(aggregate(&backward), expected);
    assert_eq!(aggregate(&rotated), expected);
}

#[test]
fn merged_partitions_equal_sequential_run() {
    // Arrange
    let lines = mixed_input();
    let (left, right) = lines.split_at(4);

    // Act
    let mut merged = aggregate(right);
    merged.merge(aggregate(left));

    // Assert
    assert_eq!(merged, aggregate(&lines));
}

#[test]
fn empty_input_yields_empty_stats() {
    let stats = aggregate(&[]);

    assert_eq!(stats, FlowStats::default());
    assert_eq!(stats.records(), 0);
}
