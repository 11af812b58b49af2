//! Analysis session
//!
//! Ties the pipeline together for one run:
//!
//! protocol table
//! lookup table
//! size admission
//! parse_record (per line)
//! StatsAggregator
//! FlowStats
//! render_report
//!
//! Per-line failures are absorbed by the aggregator. Everything returned as
//! `AnalysisError` aborts the run before a report is written.

mod error;
mod session;


pub use error::AnalysisError;
pub use session::{AnalysisSession, run_analysis};
