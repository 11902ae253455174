//! Builds in-memory filesystem trees from textual listings.
//!
//! A listing is either the output of the Unix `tree` command or a simpler
//! tab-indented format:
//!
//! ```
//! use memtree::{Directory, parse_unix_tree};
//!
//! let tree = parse_unix_tree(
//!     ".\n\
//!      ├── Cargo.toml\n\
//!      └── src\n    \
//!          └── lib.rs\n"
//!         .as_bytes(),
//! )
//! .unwrap();
//!
//! let src: &Directory = tree.lookup_directory("src").unwrap();
//! assert!(src.get("lib.rs").is_some_and(|node| node.is_file()));
//! ```

pub mod filesystem;
pub mod parser;
pub mod render;

pub use filesystem::{Directory, File, FilesystemNode, FilesystemTree, PathError};
pub use parser::{
    LineParser, LineSyntaxError, ParsedLine, Tab, TreeBuildError, Unix, parse_tab_tree,
    parse_unix_tree,
};
