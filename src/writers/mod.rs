pub mod report_writer;

pub use report_writer::{JsonReport, RegionSummary, ReportFormat, ReportWriter};
