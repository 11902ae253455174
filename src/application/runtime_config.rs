use std::path::PathBuf;

use derive_more::Display;
use supports_color::Stream;

use crate::application::data::ListingFormat;
use crate::cli::Cli;

const STDIN_ARGUMENT: &str = "-";

/// Where the listing is read from
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputSource {
    #[display("stdin")]
    Stdin,
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != STDIN_ARGUMENT => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: InputSource,
    pub format: ListingFormat,
    pub output: ListingFormat,
    pub report: bool,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input.into(),
            format: cli.format,
            output: cli.output.unwrap_or(cli.format),
            report: cli.report,
            color: !cli.no_color && supports_color::on(Stream::Stdout).is_some(),
        }
    }
}
