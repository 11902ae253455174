use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use memtree::render::{NodeStyle, Plain, report_line};
use memtree::{FilesystemTree, TreeBuildError};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::{InputSource, RuntimeConfig};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let rendered = Self::render(&app_config)?;

        let mut stdout = io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .context(WriteSnafu)
    }

    /// Reads the configured listing and renders it in the output dialect
    pub fn render(app_config: &RuntimeConfig) -> Result<String, ApplicationError> {
        let tree = Self::read_tree(app_config)?;
        let counts = tree.counts();
        info!(
            "Built tree with {} directories and {} files",
            counts.directories, counts.files
        );

        let style = TerminalStyle {
            color: app_config.color,
        };
        let mut rendered = app_config.output.render(&tree, &style);
        if app_config.report {
            rendered.push('\n');
            rendered.push_str(&report_line(&tree));
            rendered.push('\n');
        }

        Ok(rendered)
    }

    fn read_tree(app_config: &RuntimeConfig) -> Result<FilesystemTree, ApplicationError> {
        debug!(
            "Reading {} listing from {}",
            app_config.format, app_config.input
        );

        let built = match &app_config.input {
            InputSource::Stdin => app_config.format.build_tree(io::stdin().lock()),
            InputSource::File(path) => {
                let file = File::open(path).context(OpenSnafu { path: path.clone() })?;
                app_config.format.build_tree(file)
            }
        };

        built.context(BuildSnafu {
            input: app_config.input.to_string(),
        })
    }
}

/// Plain names, with directories highlighted when the terminal allows it
#[derive(Debug, Clone, Copy)]
struct TerminalStyle {
    color: bool,
}

impl NodeStyle for TerminalStyle {
    fn directory(&self, name: &str) -> String {
        let label = Plain.directory(name);
        if self.color {
            label.blue().bold().to_string()
        } else {
            label
        }
    }

    fn file(&self, name: &str) -> String {
        Plain.file(name)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to open the listing: {}", path.display()))]
    OpenError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to build a tree from {}", input))]
    BuildError {
        input: String,
        source: TreeBuildError,
    },
    #[snafu(display("Failed to write the rendered tree"))]
    WriteError { source: io::Error },
}
