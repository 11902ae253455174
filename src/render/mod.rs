//! Rendering of [`FilesystemTree`]s back into textual listings.
//!
//! Every directory is written with a trailing separator (the `tree -F`
//! convention), so the matching parser reads the output back into an equal
//! tree, empty directories included.

mod tab;
mod unix;

pub use tab::{render_tab, render_tab_with};
pub use unix::{render_unix, render_unix_with};

use crate::filesystem::{FilesystemNode, FilesystemTree, PATH_SEPARATOR};

/// Root declaration written at the top of every listing
const ROOT_LINE: &str = ".";

/// Decides how node names appear in a rendered listing
pub trait NodeStyle {
    fn directory(&self, name: &str) -> String;
    fn file(&self, name: &str) -> String;
}

/// Bare names, directories suffixed with the path separator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl NodeStyle for Plain {
    fn directory(&self, name: &str) -> String {
        format!("{name}{PATH_SEPARATOR}")
    }

    fn file(&self, name: &str) -> String {
        name.to_string()
    }
}

fn label(style: &impl NodeStyle, name: &str, node: &FilesystemNode) -> String {
    match node {
        FilesystemNode::Directory(_) => style.directory(name),
        FilesystemNode::File(_) => style.file(name),
    }
}

/// The summary `tree` prints below a listing, e.g. `2 directories, 1 file`
pub fn report_line(tree: &FilesystemTree) -> String {
    let counts = tree.counts();
    let directories = match counts.directories {
        1 => "directory",
        _ => "directories",
    };
    let files = match counts.files {
        1 => "file",
        _ => "files",
    };

    format!(
        "{} {directories}, {} {files}",
        counts.directories, counts.files
    )
}
