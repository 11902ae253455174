use crate::filesystem::{Directory, FilesystemNode, FilesystemTree};
use crate::render::{NodeStyle, Plain, ROOT_LINE, label};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Renders a tree the way the `tree` command prints it
pub fn render_unix(tree: &FilesystemTree) -> String {
    render_unix_with(tree, &Plain)
}

pub fn render_unix_with(tree: &FilesystemTree, style: &impl NodeStyle) -> String {
    let mut output = format!("{ROOT_LINE}\n");
    write_children(&mut output, tree.root(), "", style);
    output
}

fn write_children(
    output: &mut String,
    directory: &Directory,
    prefix: &str,
    style: &impl NodeStyle,
) {
    let child_count = directory.len();

    for (index, (name, node)) in directory.iter().enumerate() {
        let is_last = index + 1 == child_count;
        let (connector, indent) = if is_last {
            (LAST_BRANCH, BLANK_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(&label(style, name, node));
        output.push('\n');

        if let FilesystemNode::Directory(child) = node {
            write_children(output, child, &format!("{prefix}{indent}"), style);
        }
    }
}
