use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ListingFormat, LogLevel};

/// Reads a textual tree listing and prints it back, optionally in another dialect
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The listing to read; stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// Dialect of the input listing
    #[clap(long, short, default_value = "unix", value_enum)]
    pub format: ListingFormat,

    /// Dialect to print, the input dialect by default
    #[clap(long, short, value_enum)]
    pub output: Option<ListingFormat>,

    /// Append the `tree` summary line after a blank line
    #[clap(long)]
    pub report: bool,

    /// Never colour directory names
    #[clap(long)]
    pub no_color: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["memtree"]).expect("Failed to parse arguments");

        assert_eq!(cli.input, None);
        assert_eq!(cli.format, ListingFormat::Unix);
        assert_eq!(cli.output, None);
        assert!(!cli.report);
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["memtree", "--format", "yaml"]);

        assert!(result.is_err());
    }
}
