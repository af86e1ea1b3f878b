use super::header::{UNKNOWN_FILENAME, parse_header_path};
use serde::Serialize;

/// Change summary for a single file in a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Path from the `diff --git a/<path> b/` header, or `"unknown"`
    pub filename: String,
    /// Number of `+` lines, excluding `+++` markers
    pub additions: usize,
    /// Number of `-` lines, excluding `---` markers
    pub deletions: usize,
    /// The raw block from the header line up to the next header, newline-joined
    pub content: String,
}

/// How a single line of a file block is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Addition,
    Deletion,
    Other,
}

impl LineKind {
    /// Classify a diff line.
    ///
    /// `+++` and `---` file markers are never counted.
    pub fn classify(line: &str) -> Self {
        if line.starts_with('+') && !line.starts_with("+++") {
            LineKind::Addition
        } else if line.starts_with('-') && !line.starts_with("---") {
            LineKind::Deletion
        } else {
            LineKind::Other
        }
    }
}

/// A file block still receiving lines.
///
/// Borrows its lines from the input so content is only materialized once,
/// when the block is closed.
#[derive(Debug)]
pub(crate) struct OpenFile<'a> {
    filename: String,
    additions: usize,
    deletions: usize,
    lines: Vec<&'a str>,
}

impl<'a> OpenFile<'a> {
    /// Open a block for `header`. The header line itself is not recorded yet.
    pub(crate) fn start(header: &str) -> Self {
        let filename = match parse_header_path(header) {
            Some(path) => path.to_string(),
            None => {
                log::debug!("unrecognized file header {header:?}, using {UNKNOWN_FILENAME:?}");
                UNKNOWN_FILENAME.to_string()
            }
        };

        OpenFile {
            filename,
            additions: 0,
            deletions: 0,
            lines: Vec::new(),
        }
    }

    /// Attribute a line to this file and count it
    pub(crate) fn push(&mut self, line: &'a str) -> LineKind {
        self.lines.push(line);

        let kind = LineKind::classify(line);
        match kind {
            LineKind::Addition => self.additions += 1,
            LineKind::Deletion => self.deletions += 1,
            LineKind::Other => {}
        }
        kind
    }

    pub(crate) fn finish(self) -> FileChange {
        log::trace!(
            "closing {} (+{} -{}, {} lines)",
            self.filename,
            self.additions,
            self.deletions,
            self.lines.len()
        );

        FileChange {
            filename: self.filename,
            additions: self.additions,
            deletions: self.deletions,
            content: self.lines.join("\n"),
        }
    }
}
