pub mod capture;
pub mod workspace;

pub use capture::{CapturedEvent, capture_events};
pub use workspace::{TestWorkspace, fixture_path, record};
