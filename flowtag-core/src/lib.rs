pub mod analysis;
pub mod cli;
pub mod conf;
pub mod flowlog;
pub mod logging;
pub mod lookup;
pub mod protocol;
pub mod report;
pub mod stats;
