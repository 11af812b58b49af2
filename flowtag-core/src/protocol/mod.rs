//! Protocol normalization
//!
//! Flow logs carry IANA protocol numbers (`6`), lookup tables usually carry
//! names (`tcp`). Everything is folded to the canonical lowercase name before
//! two keys are compared.
//!
//! The active map is either the built-in one or, when a protocol mapping file
//! exists and parses, the file's rows. The two are never merged.

mod constants;
mod table;


pub use constants::BUILTIN_PROTOCOLS;
pub use table::{ProtocolMapError, ProtocolSource, ProtocolTable};
