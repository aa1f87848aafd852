pub mod engine;
pub mod error;
pub mod record;
pub mod split;
pub mod tables;

pub use engine::{compute_index, IndexBreakdown, IndexResult};
pub use error::{ConversionTable, IndexError};
pub use record::{AssessmentRecord, Subscale};
pub use split::{split_score, SplitScore};
