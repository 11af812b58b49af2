use crate::lookup::TagKey;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

pub fn render_report(
    tag_counts: &HashMap<String, u64>,
    combo_counts: &HashMap<TagKey, u64>,
) -> String {
    let mut out = String::new();

    // stable ordering: by tag
    let mut tags: Vec<_> = tag_counts.iter().collect();
    tags.sort_by(|(a, _), (b, _)| a.cmp(b));

    out.push_str("Tag Counts:\n");
    out.push_str("Tag,Count\n");
    for (tag, count) in tags {
        let _ = writeln!(out, "{tag},{count}");
    }

    // by port, then protocol
    let mut combos: Vec<_> = combo_counts.iter().collect();
    combos.sort_by(|(a, _), (b, _)| a.cmp(b));

    out.push_str("\nPort/Protocol Combination Counts:\n");
    out.push_str("Port,Protocol,Count\n");
    for (key, count) in combos {
        let _ = writeln!(out, "{},{},{count}", key.port, key.protocol);
    }

    out
}

pub fn write_report(path: &Path, report: &str) -> io::Result<()> {
    fs::write(path, report)
}
