use std::io::Read;

use clap::ValueEnum;
use derive_more::Display;
use memtree::render::{NodeStyle, render_tab_with, render_unix_with};
use memtree::{FilesystemTree, LineParser, Tab, TreeBuildError, Unix};

/// The textual dialects a listing can be written in
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Display)]
pub enum ListingFormat {
    /// Output of the `tree` command
    #[default]
    #[display("unix")]
    Unix,
    /// One tab of indentation per level
    #[display("tab")]
    Tab,
}

impl ListingFormat {
    pub fn build_tree(&self, reader: impl Read) -> Result<FilesystemTree, TreeBuildError> {
        match self {
            ListingFormat::Unix => Unix.build_tree(reader),
            ListingFormat::Tab => Tab.build_tree(reader),
        }
    }

    pub fn render(&self, tree: &FilesystemTree, style: &impl NodeStyle) -> String {
        match self {
            ListingFormat::Unix => render_unix_with(tree, style),
            ListingFormat::Tab => render_tab_with(tree, style),
        }
    }
}
