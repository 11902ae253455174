use std::io::Read;

use snafu::Snafu;

use crate::filesystem::FilesystemTree;
use crate::parser::TreeBuildError;
use crate::parser::builder::build_tree;

/// Horizontal box-drawing glyph ending the `├──`/`└──` connector
const BOX_HORIZONTAL: char = '─';
/// Vertical box-drawing glyph continuing a parent's branch
const BOX_VERTICAL: char = '│';
const BOX_SPACE: char = ' ';
const BOX_HARD_SPACE: char = '\u{00A0}';
/// Columns the `tree` command spends on each nesting level
const UNIX_INDENT_WIDTH: usize = 4;

/// Depth and raw name of a single listing line.
///
/// The name is kept as written, so directories may still carry their
/// trailing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub depth: usize,
    pub name: String,
}

impl ParsedLine {
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
        }
    }
}

/// Converts one line of a tree listing into its depth and node name.
///
/// Lines handed to a parser are never empty and have trailing whitespace
/// already removed. Any `Fn(&str) -> Result<ParsedLine, LineSyntaxError>`
/// closure is a parser too.
pub trait LineParser {
    fn parse_line(&self, line: &str) -> Result<ParsedLine, LineSyntaxError>;

    /// Builds a tree from a listing, parsing each line with this parser
    fn build_tree<R: Read>(&self, reader: R) -> Result<FilesystemTree, TreeBuildError>
    where
        Self: Sized,
    {
        build_tree(self, reader)
    }
}

impl<F> LineParser for F
where
    F: Fn(&str) -> Result<ParsedLine, LineSyntaxError>,
{
    fn parse_line(&self, line: &str) -> Result<ParsedLine, LineSyntaxError> {
        self(line)
    }
}

/// Parser for the output of the Unix `tree` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unix;

impl LineParser for Unix {
    fn parse_line(&self, line: &str) -> Result<ParsedLine, LineSyntaxError> {
        let indent = line
            .chars()
            .take_while(|c| matches!(*c, BOX_SPACE | BOX_HARD_SPACE | BOX_VERTICAL))
            .count();
        let depth = indent / UNIX_INDENT_WIDTH;

        let Some(connector) = line.rfind(BOX_HORIZONTAL) else {
            return LineSyntaxSnafu { line }.fail();
        };
        let candidate = &line[connector..];
        let Some(space) = candidate.find(BOX_SPACE) else {
            return LineSyntaxSnafu { line }.fail();
        };

        Ok(ParsedLine::new(depth, &candidate[space + 1..]))
    }
}

/// Parser for listings indented with one tab per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tab;

impl LineParser for Tab {
    fn parse_line(&self, line: &str) -> Result<ParsedLine, LineSyntaxError> {
        let name = line.trim_start_matches('\t');
        let depth = line.len() - name.len();

        Ok(ParsedLine::new(depth, name))
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("invalid syntax: {:?}", line))]
pub struct LineSyntaxError {
    line: String,
}

impl LineSyntaxError {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The offending line, as handed to the parser
    pub fn line(&self) -> &str {
        &self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("├── file.txt", 0, "file.txt")]
    #[case("└── dir/", 0, "dir/")]
    #[case("│   ├── nested", 1, "nested")]
    #[case("    └── nested", 1, "nested")]
    #[case("│   │   └── deep.rs", 2, "deep.rs")]
    #[case("│\u{a0}\u{a0} └── hard_space", 1, "hard_space")]
    #[case("    │   └── mixed", 2, "mixed")]
    fn test_unix_parses_depth_and_name(
        #[case] line: &str,
        #[case] depth: usize,
        #[case] name: &str,
    ) {
        assert_eq!(Unix.parse_line(line), Ok(ParsedLine::new(depth, name)));
    }

    #[test]
    fn test_unix_keeps_spaces_inside_names() {
        let parsed = Unix.parse_line("│   └── my long file name.txt");

        assert_eq!(parsed, Ok(ParsedLine::new(1, "my long file name.txt")));
    }

    #[rstest]
    #[case("   weird line")]
    #[case("plain")]
    #[case("└──")]
    #[case("│   └──name")]
    fn test_unix_rejects_lines_without_connector_and_space(#[case] line: &str) {
        let result = Unix.parse_line(line);

        assert_eq!(result, Err(LineSyntaxError::new(line)));
    }

    #[rstest]
    #[case("file.txt", 0, "file.txt")]
    #[case("\tfile.txt", 1, "file.txt")]
    #[case("\t\t\tdir/", 3, "dir/")]
    #[case("\tname\twith tab", 1, "name\twith tab")]
    fn test_tab_parses_depth_and_name(
        #[case] line: &str,
        #[case] depth: usize,
        #[case] name: &str,
    ) {
        assert_eq!(Tab.parse_line(line), Ok(ParsedLine::new(depth, name)));
    }

    #[test]
    fn test_closure_is_a_line_parser() {
        let dashes = |line: &str| -> Result<ParsedLine, LineSyntaxError> {
            let name = line.trim_start_matches('-');
            Ok(ParsedLine::new(line.len() - name.len(), name))
        };

        assert_eq!(dashes.parse_line("--leaf"), Ok(ParsedLine::new(2, "leaf")));
    }

    #[test]
    fn test_line_syntax_error_display() {
        let error = LineSyntaxError::new("   weird line");

        assert_eq!(error.to_string(), "invalid syntax: \"   weird line\"");
        assert_eq!(error.line(), "   weird line");
    }
}
