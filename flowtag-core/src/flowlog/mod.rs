//! Flow-log record parsing
//!
//! Only the version 2 layout is understood. Fields are positional and
//! whitespace separated; only the destination port and protocol are used:
//!
//! ```text
//! 0 version | 1 account | 2 interface | 3 srcaddr | 4 dstaddr | 5 srcport
//! 6 dstport | 7 protocol | 8 packets | 9 bytes | 10 start | 11 end
//! 12 action | 13 log-status
//! ```

mod constants;
mod error;
mod parse;


pub use constants::*;
pub use error::RecordError;
pub use parse::parse_record;
