pub mod observation_reader;
pub mod record_parser;

pub use observation_reader::{ObservationIterator, ObservationReader, SourceStats};
pub use record_parser::parse_line;
