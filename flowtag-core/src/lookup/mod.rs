mod table;
mod types;


pub use table::LookupTable;
pub use types::{TagKey, UNTAGGED};
