//! Parsing of textual tree listings into [`FilesystemTree`]s.
//!
//! A listing starts with a root declaration line (`.` or a slash-separated
//! path) followed by one line per node. How a line maps to a depth and a name
//! is decided by a [`LineParser`]; [`Unix`] reads the output of the `tree`
//! command and [`Tab`] reads tab-indented listings.
//!
//! Input is read as bytes. Lines that are not valid UTF-8 are decoded
//! lossily, so an undecodable byte in a name becomes `U+FFFD`.

mod builder;
mod line_parser;

pub use builder::{TreeBuildError, build_tree};
pub use line_parser::{LineParser, LineSyntaxError, ParsedLine, Tab, Unix};

use crate::filesystem::FilesystemTree;

/// Parses a buffer holding `tree` command output.
///
/// Names that are not valid UTF-8 are decoded lossily.
///
/// ```
/// let tree = memtree::parse_unix_tree(".\n└── dir\n    └── file.txt\n".as_bytes()).unwrap();
///
/// assert_eq!(tree.paths(), vec!["dir/", "dir/file.txt"]);
/// ```
pub fn parse_unix_tree(buffer: &[u8]) -> Result<FilesystemTree, TreeBuildError> {
    Unix.build_tree(buffer)
}

/// Parses a buffer holding a tab-indented listing.
///
/// Names that are not valid UTF-8 are decoded lossily.
///
/// ```
/// let tree = memtree::parse_tab_tree(b".\ndir\n\tfile.txt\n").unwrap();
///
/// assert_eq!(tree.paths(), vec!["dir/", "dir/file.txt"]);
/// ```
pub fn parse_tab_tree(buffer: &[u8]) -> Result<FilesystemTree, TreeBuildError> {
    Tab.build_tree(buffer)
}
