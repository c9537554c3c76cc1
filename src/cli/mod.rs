pub mod args;
pub mod commands;

pub use args::{usage, Cli};
pub use commands::{run, run_with_writer, setup_logging};
