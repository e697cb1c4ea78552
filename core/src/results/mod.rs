pub mod record;
pub mod sweep;

pub use record::{TaskRecord, RECORD_FIELDS};
pub use sweep::{SweepConfig, SweepParameter, SweepPrinter, SweepSummary};
