//! Turn unified diff text into per-file change counts and a directory tree.
//!
//! The crate has two stages. [`DiffSummary::parse`] splits `git diff` output
//! into one [`FileChange`] per `diff --git` header and counts added and
//! removed lines. [`build_file_tree`] folds those files into a forest of
//! [`TreeNode`]s with per-directory file counts, ordered directories first
//! and then by name.
//!
//! Neither stage performs I/O or fails: malformed input degrades to files
//! named `"unknown"` or to an empty summary.
//!
//! # Examples
//!
//! ```
//! use diff_outline::{DiffSummary, build_file_tree, format_summary};
//!
//! let text = "\
//! diff --git a/src/lib.rs b/src/lib.rs
//! --- a/src/lib.rs
//! +++ b/src/lib.rs
//! @@ -1 +1,2 @@
//! -old
//! +new
//! +newer
//! ";
//!
//! let summary = DiffSummary::parse(text).unwrap();
//! assert_eq!(summary.files[0].filename, "src/lib.rs");
//! assert_eq!(format_summary(&summary), "1 file changed, +2 lines, -1 lines");
//!
//! let tree = build_file_tree(&summary.files);
//! assert_eq!(tree[0].path, "src");
//! assert_eq!(tree[0].children()[0].path, "src/lib.rs");
//! ```

pub mod diff;
pub mod tree;

pub use diff::{DiffSummary, FileChange, format_summary, parse_diff};
pub use tree::{
    NodeKind, RowKind, TreeNode, TreeRow, build_file_tree, compare_nodes, render_tree, set_expanded,
    toggle_expanded, visible_rows,
};
