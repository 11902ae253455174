use std::cmp::Ordering;
use std::io::{BufRead, BufReader, Read};

use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::filesystem::{Directory, FilesystemTree, PATH_SEPARATOR, PathError};
use crate::parser::{LineParser, LineSyntaxError, ParsedLine};

/// Root declaration meaning "the top of the tree itself"
const ROOT_MARKER: &str = ".";

/// Builds a tree from a listing whose first line declares the root and whose
/// following lines are handed to `parser` one by one.
///
/// The listing ends at the end of the input or at the first blank line;
/// anything after a blank line is ignored.
pub fn build_tree<P, R>(parser: &P, reader: R) -> Result<FilesystemTree, TreeBuildError>
where
    P: LineParser + ?Sized,
    R: Read,
{
    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::new();

    let read = reader.read_until(b'\n', &mut buffer).context(ReadSnafu)?;
    if read == 0 || !buffer.ends_with(b"\n") {
        return UnexpectedEofSnafu.fail();
    }

    let mut tree = FilesystemTree::empty();
    let line = String::from_utf8_lossy(&buffer);
    let declared_root = line.trim();
    let root_path = if declared_root == ROOT_MARKER {
        None
    } else {
        debug!("Declared tree root: {declared_root}");
        tree.make_dirs_all(declared_root)?;
        tree.lookup_directory(declared_root)?;
        Some(declared_root.to_string())
    };

    let root = fold_lines(parser, &mut reader)?;
    match root_path {
        Some(path) => *tree.lookup_directory_mut(&path)? = root,
        None => *tree.root_mut() = root,
    }

    Ok(tree)
}

/// Reads the body of a listing and folds it into a directory.
///
/// A line's node is inserted one iteration late: only the depth of the line
/// after it tells whether it is a directory being entered.
fn fold_lines<P, B>(parser: &P, reader: &mut B) -> Result<Directory, TreeBuildError>
where
    P: LineParser + ?Sized,
    B: BufRead,
{
    let mut stack = AncestorStack::default();
    let mut pending: Option<ParsedLine> = None;
    let mut buffer = Vec::new();
    let mut line_number: usize = 1;

    loop {
        buffer.clear();
        line_number += 1;

        let read = reader.read_until(b'\n', &mut buffer).context(ReadSnafu)?;
        let line = String::from_utf8_lossy(&buffer);
        let current = if line.trim().is_empty() {
            if read != 0 {
                debug!("Blank line {line_number} ends the listing, ignoring the rest of the input");
            }
            None
        } else {
            let parsed = parser
                .parse_line(line.trim_end())
                .context(SyntaxSnafu { line_number })?;
            trace!(depth = parsed.depth, name = %parsed.name, "Parsed line {line_number}");
            Some(parsed)
        };

        if let Some(previous) = pending.take() {
            let next_depth = current.as_ref().map_or(previous.depth, |parsed| parsed.depth);
            stack.insert(previous, next_depth);
        }

        match current {
            Some(parsed) => pending = Some(parsed),
            None => break,
        }
    }

    debug!("Read {} listing lines", line_number - 1);
    Ok(stack.finish())
}

/// Splits a raw name into the node name and whether it is marked as a directory
fn classify(raw_name: &str) -> (String, bool) {
    match raw_name.strip_suffix(PATH_SEPARATOR) {
        Some(_) => (raw_name.trim_end_matches(PATH_SEPARATOR).to_string(), true),
        None => (raw_name.to_string(), false),
    }
}

/// The directories open below the root, innermost last.
///
/// Each open directory is owned by its frame and moves into its parent when
/// the frame is closed, so the root can never be popped.
#[derive(Debug, Default)]
struct AncestorStack {
    root: Directory,
    open: Vec<(String, Directory)>,
}

impl AncestorStack {
    fn current(&mut self) -> &mut Directory {
        match self.open.last_mut() {
            Some((_, directory)) => directory,
            None => &mut self.root,
        }
    }

    /// Inserts `previous` now that the depth of the line following it is known
    fn insert(&mut self, previous: ParsedLine, next_depth: usize) {
        let (name, is_directory) = classify(&previous.name);

        match next_depth.cmp(&previous.depth) {
            Ordering::Greater => self.open.push((name, Directory::new())),
            Ordering::Equal => self.insert_classified(name, is_directory),
            Ordering::Less => {
                self.insert_classified(name, is_directory);
                self.ascend(previous.depth - next_depth);
            }
        }
    }

    fn insert_classified(&mut self, name: String, is_directory: bool) {
        let current = self.current();
        if is_directory {
            current.insert_directory(name, Directory::new());
        } else {
            current.insert_file(name);
        }
    }

    fn ascend(&mut self, levels: usize) {
        if levels > self.open.len() {
            debug!(
                "Ascending {levels} levels with {} open directories, clamping to the root",
                self.open.len()
            );
        }
        for _ in 0..levels.min(self.open.len()) {
            self.close();
        }
    }

    fn close(&mut self) {
        if let Some((name, directory)) = self.open.pop() {
            self.current().insert_directory(name, directory);
        }
    }

    fn finish(mut self) -> Directory {
        while !self.open.is_empty() {
            self.close();
        }
        self.root
    }
}

#[derive(Debug, Snafu)]
pub enum TreeBuildError {
    #[snafu(display("Unexpected end of input, expected a root declaration line"))]
    UnexpectedEof,
    #[snafu(display("Failed to read the tree listing"))]
    ReadError { source: std::io::Error },
    #[snafu(display("Invalid syntax on line {}", line_number))]
    SyntaxError {
        line_number: usize,
        source: LineSyntaxError,
    },
    #[snafu(transparent)]
    RootPathError { source: PathError },
}
