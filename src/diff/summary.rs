use super::file::{FileChange, LineKind, OpenFile};
use super::header::is_file_header;
use serde::Serialize;
use std::fmt;

/// Per-file and aggregate counts for a complete diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    /// Files in the order their headers appear in the diff
    pub files: Vec<FileChange>,
    pub total_additions: usize,
    pub total_deletions: usize,
    pub files_changed: usize,
}

impl DiffSummary {
    /// Parse unified diff text (as produced by `git diff`) into a summary.
    ///
    /// Returns `None` when the text is empty or only whitespace and byte-order
    /// marks. Text without any `diff --git` header yields a summary with no
    /// files.
    ///
    /// Lines before the first header are ignored. Headers that do not match
    /// `diff --git a/<path> b/...` still open a block named `"unknown"`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim_matches(is_blank).is_empty() {
            return None;
        }

        let mut files = Vec::new();
        let mut current: Option<OpenFile<'_>> = None;
        let mut total_additions = 0;
        let mut total_deletions = 0;

        // Split on '\n' only so content round-trips byte for byte
        for line in text.split('\n') {
            if is_file_header(line) {
                if let Some(open) = current.take() {
                    files.push(open.finish());
                }
                current = Some(OpenFile::start(line));
            }

            let Some(open) = current.as_mut() else {
                continue;
            };

            match open.push(line) {
                LineKind::Addition => total_additions += 1,
                LineKind::Deletion => total_deletions += 1,
                LineKind::Other => {}
            }
        }

        // Don't forget the last file
        if let Some(open) = current {
            files.push(open.finish());
        }

        log::debug!(
            "parsed {} files (+{} -{})",
            files.len(),
            total_additions,
            total_deletions
        );

        Some(DiffSummary {
            files_changed: files.len(),
            files,
            total_additions,
            total_deletions,
        })
    }

    /// First file whose filename is exactly `filename`
    pub fn file(&self, filename: &str) -> Option<&FileChange> {
        self.files.iter().find(|f| f.filename == filename)
    }

    /// Whether the diff touched no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} changed, +{} lines, -{} lines",
            self.files_changed,
            super::file_noun(self.files_changed),
            self.total_additions,
            self.total_deletions
        )
    }
}
