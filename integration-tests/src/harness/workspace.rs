use flowtag_core::conf::AnalyzerConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// A version 2 flow-log record with the given destination port and protocol.
pub fn record(dstport: impl std::fmt::Display, protocol: &str) -> String {
    format!(
        "2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 {dstport} {protocol} 25 20000 1620140761 1620140821 ACCEPT OK\n"
    )
}

/// Scratch directory holding one run's inputs and outputs.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write workspace file");
        path
    }

    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::copy(fixture_path(name), &path).expect("failed to copy fixture");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read workspace file")
    }

    /// Defaults, with the protocol mapping file looked up inside the workspace.
    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            protocol_mappings: self.path("protocol_mappings.csv"),
            ..AnalyzerConfig::default()
        }
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
