//! Display helpers for a file tree: expansion state, flattened rows, and a
//! plain-text outline.

use super::node::{NodeKind, TreeNode};
use crate::diff::file_noun;

/// A node as it appears in a flattened, scrollable listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    /// Nesting level, 0 for forest roots
    pub depth: usize,
    pub name: &'a str,
    pub path: &'a str,
    pub kind: RowKind,
}

/// Per-kind data shown on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    File { additions: usize, deletions: usize },
    Directory { file_count: usize, expanded: bool },
}

impl<'a> TreeRow<'a> {
    fn new(depth: usize, node: &'a TreeNode) -> Self {
        let kind = match &node.kind {
            NodeKind::File {
                additions,
                deletions,
            } => RowKind::File {
                additions: *additions,
                deletions: *deletions,
            },
            NodeKind::Directory {
                file_count,
                expanded,
                ..
            } => RowKind::Directory {
                file_count: *file_count,
                expanded: *expanded,
            },
        };

        TreeRow {
            depth,
            name: &node.name,
            path: &node.path,
            kind,
        }
    }
}

/// Flatten the forest in display order.
///
/// Collapsed directories appear as a row but their descendants do not.
pub fn visible_rows(nodes: &[TreeNode]) -> Vec<TreeRow<'_>> {
    let mut rows = Vec::new();
    collect_rows(nodes, 0, &mut rows);
    rows
}

fn collect_rows<'a>(nodes: &'a [TreeNode], depth: usize, rows: &mut Vec<TreeRow<'a>>) {
    for node in nodes {
        rows.push(TreeRow::new(depth, node));
        if node.is_expanded() {
            collect_rows(node.children(), depth + 1, rows);
        }
    }
}

/// Expand or collapse the directory at `path`.
///
/// Returns `false` if no directory has that path.
pub fn set_expanded(nodes: &mut [TreeNode], path: &str, expanded: bool) -> bool {
    match expanded_flag(nodes, path) {
        Some(flag) => {
            *flag = expanded;
            true
        }
        None => false,
    }
}

/// Flip the expansion state of the directory at `path`.
///
/// Returns `false` if no directory has that path.
pub fn toggle_expanded(nodes: &mut [TreeNode], path: &str) -> bool {
    match expanded_flag(nodes, path) {
        Some(flag) => {
            *flag = !*flag;
            true
        }
        None => false,
    }
}

fn expanded_flag<'a>(nodes: &'a mut [TreeNode], path: &str) -> Option<&'a mut bool> {
    for node in nodes {
        let NodeKind::Directory {
            children, expanded, ..
        } = &mut node.kind
        else {
            continue;
        };

        if node.path == path {
            return Some(expanded);
        }

        let below = path
            .strip_prefix(node.path.as_str())
            .is_some_and(|rest| rest.starts_with('/'));
        if below {
            if let Some(flag) = expanded_flag(children, path) {
                return Some(flag);
            }
        }
    }
    None
}

/// Render the visible part of the forest as an indented outline.
///
/// ```text
/// v src/ (3 files)
///   > diff/ (2 files)
///     lib.rs +4 -1
///   Cargo.toml +1 -1
/// ```
pub fn render_tree(nodes: &[TreeNode]) -> String {
    let mut result = String::new();

    for row in visible_rows(nodes) {
        result.push_str(&"  ".repeat(row.depth));

        match row.kind {
            RowKind::Directory {
                file_count,
                expanded,
            } => {
                let marker = if expanded { 'v' } else { '>' };
                result.push_str(&format!(
                    "{} {}/ ({} {})\n",
                    marker,
                    row.name,
                    file_count,
                    file_noun(file_count)
                ));
            }
            RowKind::File {
                additions,
                deletions,
            } => {
                result.push_str(&format!("  {} +{} -{}\n", row.name, additions, deletions));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::FileChange;
    use crate::tree::build_file_tree;
    use similar_asserts::assert_eq;

    fn sample_tree() -> Vec<TreeNode> {
        let files: Vec<FileChange> = [
            ("src/diff/mod.rs", 2, 0),
            ("src/diff/file.rs", 5, 3),
            ("src/lib.rs", 4, 1),
            ("Cargo.toml", 1, 1),
        ]
        .into_iter()
        .map(|(filename, additions, deletions)| FileChange {
            filename: filename.to_string(),
            additions,
            deletions,
            content: String::new(),
        })
        .collect();
        build_file_tree(&files)
    }

    fn row_paths<'a>(rows: &[TreeRow<'a>]) -> Vec<(usize, &'a str)> {
        rows.iter().map(|r| (r.depth, r.path)).collect()
    }

    #[test]
    fn rows_follow_display_order() {
        let tree = sample_tree();

        assert_eq!(
            row_paths(&visible_rows(&tree)),
            vec![
                (0, "src"),
                (1, "src/diff"),
                (2, "src/diff/file.rs"),
                (2, "src/diff/mod.rs"),
                (1, "src/lib.rs"),
                (0, "Cargo.toml"),
            ]
        );
    }

    #[test]
    fn collapsed_directories_hide_descendants() {
        let mut tree = sample_tree();
        assert!(set_expanded(&mut tree, "src/diff", false));

        assert_eq!(
            row_paths(&visible_rows(&tree)),
            vec![
                (0, "src"),
                (1, "src/diff"),
                (1, "src/lib.rs"),
                (0, "Cargo.toml"),
            ]
        );

        assert!(set_expanded(&mut tree, "src", false));
        assert_eq!(
            row_paths(&visible_rows(&tree)),
            vec![(0, "src"), (0, "Cargo.toml")]
        );
    }

    #[test]
    fn rows_carry_names_and_counts() {
        let mut tree = sample_tree();
        set_expanded(&mut tree, "src/diff", false);
        let rows = visible_rows(&tree);

        assert_eq!(
            rows[1],
            TreeRow {
                depth: 1,
                name: "diff",
                path: "src/diff",
                kind: RowKind::Directory {
                    file_count: 2,
                    expanded: false,
                },
            }
        );
        assert_eq!(
            rows[2],
            TreeRow {
                depth: 1,
                name: "lib.rs",
                path: "src/lib.rs",
                kind: RowKind::File {
                    additions: 4,
                    deletions: 1,
                },
            }
        );
    }

    #[test]
    fn toggle_flips_state() {
        let mut tree = sample_tree();

        assert!(toggle_expanded(&mut tree, "src"));
        assert!(!tree[0].is_expanded());
        assert!(toggle_expanded(&mut tree, "src"));
        assert!(tree[0].is_expanded());
    }

    #[test]
    fn expansion_ignores_files_and_missing_paths() {
        let mut tree = sample_tree();

        assert!(!set_expanded(&mut tree, "Cargo.toml", false));
        assert!(!toggle_expanded(&mut tree, "src/lib.rs"));
        assert!(!toggle_expanded(&mut tree, "nope"));
        assert!(!toggle_expanded(&mut tree, "sr"));
        assert_eq!(tree, sample_tree());
    }

    #[test]
    fn render_expanded_tree() {
        let tree = sample_tree();
        insta::assert_snapshot!(render_tree(&tree), @r"
        v src/ (3 files)
          v diff/ (2 files)
              file.rs +5 -3
              mod.rs +2 -0
            lib.rs +4 -1
          Cargo.toml +1 -1
        ");
    }

    #[test]
    fn render_collapsed_directory() {
        let mut tree = sample_tree();
        set_expanded(&mut tree, "src/diff", false);

        assert_eq!(
            render_tree(&tree),
            "v src/ (3 files)\n  > diff/ (2 files)\n    lib.rs +4 -1\n  Cargo.toml +1 -1\n"
        );
    }

    #[test]
    fn render_single_file_directory() {
        let tree = build_file_tree(&[FileChange {
            filename: "docs/README.md".to_string(),
            additions: 0,
            deletions: 7,
            content: String::new(),
        }]);

        assert_eq!(render_tree(&tree), "v docs/ (1 file)\n    README.md +0 -7\n");
    }

    #[test]
    fn render_empty_forest() {
        assert_eq!(render_tree(&[]), "");
    }
}
