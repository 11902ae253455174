//! In-memory filesystem tree representation.
//!
//! This module provides a tree-like structure to represent filesystems,
//! where nodes can be either directories (that can contain other nodes)
//! or files.

mod tree;

pub use tree::{
    Directory, File, FilesystemNode, FilesystemTree, PATH_SEPARATOR, PathError, TreeCounts,
};
