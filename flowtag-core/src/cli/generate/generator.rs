use crate::cli::generate::constants::{
    ACCOUNT_ID, ACTIONS, COMMON_PORTS, DSTPORT_RANGE, ENI_ALPHABET, HIGH_PORTS, PROGRESS_EVERY,
    PROTOCOL_NUMBERS, SERVICE_TAGS,
};
use anyhow::{Result, bail};
use rand::Rng;
use std::collections::HashSet;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedLog {
    pub lines: u64,
    pub bytes: u64,
}

pub struct FlowLogGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> FlowLogGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Number of distinct (port, protocol) rows a lookup table can hold.
    pub fn lookup_capacity() -> usize {
        let ports: HashSet<u16> = COMMON_PORTS.iter().copied().chain(HIGH_PORTS).collect();
        ports.len() * PROTOCOL_NUMBERS.len()
    }

    /// Write `entries` unique lookup rows. Every common port/protocol pair
    /// comes first, the rest are random.
    pub fn write_lookup_table<W: Write>(&mut self, entries: usize, writer: W) -> Result<()> {
        if entries > Self::lookup_capacity() {
            bail!(
                "cannot generate {entries} unique lookup entries, at most {} exist",
                Self::lookup_capacity()
            );
        }

        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["dstport", "protocol", "tag"])?;

        let mut used: HashSet<(u16, &str)> = HashSet::with_capacity(entries);

        for &port in COMMON_PORTS {
            for &protocol in PROTOCOL_NUMBERS {
                if used.len() >= entries {
                    break;
                }
                if used.insert((port, protocol)) {
                    self.write_lookup_row(&mut wtr, port, protocol)?;
                }
            }
        }

        while used.len() < entries {
            let port = self.any_port();
            let protocol = self.choose(PROTOCOL_NUMBERS);
            if used.insert((port, protocol)) {
                self.write_lookup_row(&mut wtr, port, protocol)?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_lookup_row<W: Write>(
        &mut self,
        wtr: &mut csv::Writer<W>,
        port: u16,
        protocol: &str,
    ) -> Result<()> {
        let tag = format!("sv_{}", self.choose(SERVICE_TAGS));
        wtr.write_record([port.to_string().as_str(), protocol, tag.as_str()])?;
        Ok(())
    }

    /// Append version 2 records until at least `min_bytes` have been written.
    pub fn write_flow_log<W: Write>(&mut self, min_bytes: u64, mut writer: W) -> Result<GeneratedLog> {
        let mut log = GeneratedLog { lines: 0, bytes: 0 };

        while log.bytes < min_bytes {
            let line = self.record_line();
            writer.write_all(line.as_bytes())?;
            log.bytes += line.len() as u64;
            log.lines += 1;

            if log.lines % PROGRESS_EVERY == 0 {
                tracing::info!(
                    lines = log.lines,
                    mb = log.bytes as f64 / 1024.0 / 1024.0,
                    "generation progress"
                );
            }
        }

        writer.flush()?;
        Ok(log)
    }

    /// One newline-terminated flow-log record.
    pub fn record_line(&mut self) -> String {
        let eni = self.eni();
        let src_ip = self.ip();
        let dst_ip = self.ip();
        let src_port = self.any_port();
        let dst_port = self.rng.random_range(DSTPORT_RANGE);
        let protocol = self.choose(PROTOCOL_NUMBERS);
        let packets = self.rng.random_range(1..=1000);
        let bytes = self.rng.random_range(64..=1500);
        let start = chrono::Utc::now().timestamp();
        let end = start + self.rng.random_range(1..=300);
        let action = self.choose(ACTIONS);

        format!(
            "2 {ACCOUNT_ID} {eni} {src_ip} {dst_ip} {src_port} {dst_port} {protocol} {packets} {bytes} {start} {end} {action} OK\n"
        )
    }

    fn any_port(&mut self) -> u16 {
        let common = COMMON_PORTS.len();
        let idx = self.rng.random_range(0..common + HIGH_PORTS.len());
        if idx < common {
            COMMON_PORTS[idx]
        } else {
            HIGH_PORTS.start + (idx - common) as u16
        }
    }

    fn ip(&mut self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.rng.random_range(1..=255u8),
            self.rng.random_range(0..=255u8),
            self.rng.random_range(0..=255u8),
            self.rng.random_range(0..=255u8)
        )
    }

    fn eni(&mut self) -> String {
        let suffix: String = (0..8)
            .map(|_| self.choose(ENI_ALPHABET) as char)
            .collect();
        format!("eni-{suffix}")
    }

    fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}
