pub mod aggregator;
pub mod summary_processor;

pub use aggregator::Aggregator;
pub use summary_processor::{RunSummary, SummaryProcessor};
