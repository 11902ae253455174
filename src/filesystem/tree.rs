use std::collections::BTreeMap;

use derive_more::{Deref, DerefMut, IsVariant};
use snafu::{Snafu, ensure};

/// Separator used by tree paths, independent of the host platform
pub const PATH_SEPARATOR: char = '/';

/// A leaf node. File contents are not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct File;

/// A directory owning its children by name.
///
/// Children are kept sorted by name, so two directories with the same entries
/// compare equal regardless of the order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Directory(BTreeMap<String, FilesystemNode>);

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&mut self, name: impl Into<String>) {
        self.0.insert(name.into(), File.into());
    }

    pub fn insert_directory(&mut self, name: impl Into<String>, directory: Directory) {
        self.0.insert(name.into(), directory.into());
    }

    pub fn get_directory(&self, name: &str) -> Option<&Directory> {
        self.0.get(name).and_then(FilesystemNode::as_directory)
    }
}

/// Represents the type of a filesystem node
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum FilesystemNode {
    File(File),
    Directory(Directory),
}

impl FilesystemNode {
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            FilesystemNode::Directory(directory) => Some(directory),
            FilesystemNode::File(_) => None,
        }
    }
}

impl From<File> for FilesystemNode {
    fn from(file: File) -> Self {
        FilesystemNode::File(file)
    }
}

impl From<Directory> for FilesystemNode {
    fn from(directory: Directory) -> Self {
        FilesystemNode::Directory(directory)
    }
}

/// Number of nodes below the root of a tree, by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub directories: usize,
    pub files: usize,
}

/// An in-memory filesystem hierarchy rooted at a single directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesystemTree {
    root: Directory,
}

impl FilesystemTree {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Directory {
        &mut self.root
    }

    /// Creates the directory at `path` together with every missing ancestor.
    /// Existing directories along the way are left untouched.
    pub fn make_dirs_all(&mut self, path: &str) -> Result<(), PathError> {
        let components = split_path(path)?;
        let mut current = &mut self.root;

        for (index, component) in components.iter().enumerate() {
            let node = current
                .entry((*component).to_string())
                .or_insert_with(|| Directory::new().into());

            current = match node {
                FilesystemNode::Directory(directory) => directory,
                FilesystemNode::File(_) => {
                    return NotADirectorySnafu {
                        path: join_components(&components[..=index]),
                    }
                    .fail();
                }
            };
        }

        Ok(())
    }

    pub fn lookup_directory(&self, path: &str) -> Result<&Directory, PathError> {
        let components = split_path(path)?;
        let mut current = &self.root;

        for (index, component) in components.iter().enumerate() {
            current = match current.get(*component) {
                Some(FilesystemNode::Directory(directory)) => directory,
                Some(FilesystemNode::File(_)) => {
                    return NotADirectorySnafu {
                        path: join_components(&components[..=index]),
                    }
                    .fail();
                }
                None => {
                    return NotFoundSnafu {
                        path: join_components(&components[..=index]),
                    }
                    .fail();
                }
            };
        }

        Ok(current)
    }

    pub fn lookup_directory_mut(&mut self, path: &str) -> Result<&mut Directory, PathError> {
        let components = split_path(path)?;
        let mut current = &mut self.root;

        for (index, component) in components.iter().enumerate() {
            current = match current.get_mut(*component) {
                Some(FilesystemNode::Directory(directory)) => directory,
                Some(FilesystemNode::File(_)) => {
                    return NotADirectorySnafu {
                        path: join_components(&components[..=index]),
                    }
                    .fail();
                }
                None => {
                    return NotFoundSnafu {
                        path: join_components(&components[..=index]),
                    }
                    .fail();
                }
            };
        }

        Ok(current)
    }

    /// Visits every node depth-first, in name order, with its path relative to the root
    pub fn walk(&self, mut f: impl FnMut(&str, &FilesystemNode)) {
        fn internal(
            directory: &Directory,
            prefix: &str,
            f: &mut impl FnMut(&str, &FilesystemNode),
        ) {
            for (name, node) in directory.iter() {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}{PATH_SEPARATOR}{name}")
                };
                f(&path, node);
                if let FilesystemNode::Directory(child) = node {
                    internal(child, &path, f);
                }
            }
        }

        internal(&self.root, "", &mut f);
    }

    /// Lists every node path, directories carrying a trailing separator
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.walk(|path, node| {
            if node.is_directory() {
                paths.push(format!("{path}{PATH_SEPARATOR}"));
            } else {
                paths.push(path.to_string());
            }
        });
        paths
    }

    pub fn counts(&self) -> TreeCounts {
        let mut counts = TreeCounts::default();
        self.walk(|_, node| match node {
            FilesystemNode::Directory(_) => counts.directories += 1,
            FilesystemNode::File(_) => counts.files += 1,
        });
        counts
    }
}

fn split_path(path: &str) -> Result<Vec<&str>, PathError> {
    ensure!(!path.is_empty(), EmptyPathSnafu);

    path.split(PATH_SEPARATOR)
        .filter(|component| !component.is_empty() && *component != ".")
        .map(|component| {
            if component == ".." {
                UnsupportedComponentSnafu { path, component }.fail()
            } else {
                Ok(component)
            }
        })
        .collect()
}

fn join_components(components: &[&str]) -> String {
    components.join("/")
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum PathError {
    #[snafu(display("Path is empty"))]
    EmptyPath,
    #[snafu(display("Path '{}' contains the unsupported component '{}'", path, component))]
    UnsupportedComponent { path: String, component: String },
    #[snafu(display("Path '{}' does not exist", path))]
    NotFound { path: String },
    #[snafu(display("Path '{}' is not a directory", path))]
    NotADirectory { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_make_dirs_all_creates_intermediate_directories() {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all("a/b/c").expect("Failed to create directories");

        assert_eq!(tree.paths(), vec!["a/", "a/b/", "a/b/c/"]);
    }

    #[test]
    fn test_make_dirs_all_is_noop_for_existing_directory() {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all("a/b").expect("Failed to create directories");
        tree.lookup_directory_mut("a/b")
            .expect("Failed to look up directory")
            .insert_file("keep.txt");

        tree.make_dirs_all("a/b").expect("Failed to create directories twice");

        assert_eq!(tree.paths(), vec!["a/", "a/b/", "a/b/keep.txt"]);
    }

    #[test]
    fn test_make_dirs_all_through_file_fails() {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all("a").expect("Failed to create directory");
        tree.lookup_directory_mut("a")
            .expect("Failed to look up directory")
            .insert_file("file");

        let result = tree.make_dirs_all("a/file/b");

        assert_eq!(
            result,
            Err(PathError::NotADirectory {
                path: "a/file".to_string()
            })
        );
    }

    #[rstest]
    #[case(".")]
    #[case("/")]
    #[case("./")]
    fn test_root_aliases_resolve_to_root(#[case] path: &str) {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all(path).expect("Failed to create root alias");

        assert!(tree.root().is_empty());
        assert_eq!(tree.lookup_directory(path), Ok(tree.root()));
    }

    #[rstest]
    #[case("a/b", "a/b")]
    #[case("./a//b/", "a/b")]
    #[case("/a/./b", "a/b")]
    fn test_paths_are_normalized(#[case] created: &str, #[case] looked_up: &str) {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all(created).expect("Failed to create directories");

        assert!(tree.lookup_directory(looked_up).is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut tree = FilesystemTree::empty();

        assert_eq!(tree.make_dirs_all(""), Err(PathError::EmptyPath));
        assert_eq!(tree.lookup_directory(""), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_parent_component_is_rejected() {
        let mut tree = FilesystemTree::empty();

        let result = tree.make_dirs_all("a/../b");

        assert_eq!(
            result,
            Err(PathError::UnsupportedComponent {
                path: "a/../b".to_string(),
                component: "..".to_string(),
            })
        );
        assert!(tree.root().is_empty());
    }

    #[test]
    fn test_lookup_missing_directory() {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all("a").expect("Failed to create directory");

        assert_eq!(
            tree.lookup_directory("a/missing/deeper"),
            Err(PathError::NotFound {
                path: "a/missing".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_file_is_not_a_directory() {
        let mut tree = FilesystemTree::empty();
        tree.root_mut().insert_file("file.txt");

        assert_eq!(
            tree.lookup_directory("file.txt"),
            Err(PathError::NotADirectory {
                path: "file.txt".to_string()
            })
        );
    }

    #[test]
    fn test_directories_compare_regardless_of_insertion_order() {
        let mut first = Directory::new();
        first.insert_file("a");
        first.insert_directory("b", Directory::new());

        let mut second = Directory::new();
        second.insert_directory("b", Directory::new());
        second.insert_file("a");

        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_and_counts() {
        let mut tree = FilesystemTree::empty();
        tree.make_dirs_all("src/bin").expect("Failed to create directories");
        tree.root_mut().insert_file("Cargo.toml");
        tree.lookup_directory_mut("src")
            .expect("Failed to look up directory")
            .insert_file("lib.rs");

        assert_eq!(
            tree.paths(),
            vec!["Cargo.toml", "src/", "src/bin/", "src/lib.rs"]
        );
        assert_eq!(
            tree.counts(),
            TreeCounts {
                directories: 2,
                files: 2
            }
        );
    }

    #[test]
    fn test_path_error_display() {
        let error = PathError::NotADirectory {
            path: "a/file".to_string(),
        };

        assert_eq!(error.to_string(), "Path 'a/file' is not a directory");
    }
}
