use crate::filesystem::{Directory, FilesystemNode, FilesystemTree};
use crate::render::{NodeStyle, Plain, ROOT_LINE, label};

/// Renders a tree with one tab of indentation per level
pub fn render_tab(tree: &FilesystemTree) -> String {
    render_tab_with(tree, &Plain)
}

pub fn render_tab_with(tree: &FilesystemTree, style: &impl NodeStyle) -> String {
    let mut output = format!("{ROOT_LINE}\n");
    write_children(&mut output, tree.root(), 0, style);
    output
}

fn write_children(
    output: &mut String,
    directory: &Directory,
    depth: usize,
    style: &impl NodeStyle,
) {
    for (name, node) in directory.iter() {
        output.push_str(&"\t".repeat(depth));
        output.push_str(&label(style, name, node));
        output.push('\n');

        if let FilesystemNode::Directory(child) = node {
            write_children(output, child, depth + 1, style);
        }
    }
}
