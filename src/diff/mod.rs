pub mod file;
pub mod header;
pub mod summary;

pub use file::FileChange;
pub use summary::DiffSummary;

/// Parse diff text that may be absent.
///
/// Absent, empty, or whitespace-only input all mean "no diff to show" and
/// return `None`.
pub fn parse_diff(text: Option<&str>) -> Option<DiffSummary> {
    text.and_then(DiffSummary::parse)
}

/// One-line description of a summary for display.
///
/// ```
/// # use diff_outline::{DiffSummary, format_summary};
/// let summary = DiffSummary::parse("diff --git a/x b/x\n+a\n-b\n+c\n").unwrap();
/// assert_eq!(format_summary(&summary), "1 file changed, +2 lines, -1 lines");
/// ```
pub fn format_summary(summary: &DiffSummary) -> String {
    summary.to_string()
}

/// "file" for exactly one, "files" otherwise (including zero)
pub(crate) fn file_noun(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
