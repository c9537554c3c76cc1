use crate::utils::constants::{FORMAT_TEXT, TIMEZONE_UTC};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "climate-summary")]
#[command(about = "Per-region summary statistics for NOAA tab-delimited climate data")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Tab-delimited observation files, processed in order")]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors and hide progress")]
    pub quiet: bool,

    #[arg(short, long, default_value = FORMAT_TEXT, help = "Report format: text or json")]
    pub format: String,

    #[arg(long, default_value = TIMEZONE_UTC, help = "Timezone for timestamps: utc or local")]
    pub timezone: String,

    #[arg(long, default_value = "false", help = "Read inputs through a memory map")]
    pub mmap: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Usage line printed when no inputs are given
pub fn usage(program: &str) -> String {
    format!("Usage: {} tdv_file1 tdv_file2 ... tdv_fileN", program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs_and_defaults() {
        let cli = Cli::try_parse_from(["climate-summary", "data_tn.tdv", "data_wa.tdv"]).unwrap();

        assert_eq!(
            cli.inputs,
            vec![PathBuf::from("data_tn.tdv"), PathBuf::from("data_wa.tdv")]
        );
        assert_eq!(cli.format, "text");
        assert_eq!(cli.timezone, "utc");
        assert!(!cli.mmap);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_zero_inputs_parse() {
        let cli = Cli::try_parse_from(["climate-summary"]).unwrap();
        assert!(cli.inputs.is_empty());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "climate-summary",
            "-v",
            "--format",
            "json",
            "--timezone",
            "local",
            "--mmap",
            "a.tdv",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.format, "json");
        assert_eq!(cli.timezone, "local");
        assert!(cli.mmap);

        let quiet = Cli::try_parse_from(["climate-summary", "-q", "a.tdv"]).unwrap();
        assert_eq!(quiet.log_level(), "error");

        assert!(Cli::try_parse_from(["climate-summary", "-v", "-q", "a.tdv"]).is_err());
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            usage("climate"),
            "Usage: climate tdv_file1 tdv_file2 ... tdv_fileN"
        );
    }
}
