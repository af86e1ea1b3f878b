use super::node::{TreeNode, compare_nodes};
use crate::diff::FileChange;

/// Build the changed-file forest from a flat list of files.
///
/// Every filename is split on `/`. Leading segments become directory nodes
/// shared by all files under the same parent; the last segment becomes a
/// file node carrying that file's counts. Each level is sorted with
/// [`compare_nodes`].
///
/// Files with identical paths are not merged: each one gets its own node.
///
/// ```
/// # use diff_outline::{DiffSummary, build_file_tree};
/// let summary = DiffSummary::parse(
///     "diff --git a/src/lib.rs b/src/lib.rs\n+a\ndiff --git a/README.md b/README.md\n+b\n",
/// )
/// .unwrap();
/// let tree = build_file_tree(&summary.files);
/// assert_eq!(tree[0].name, "src");
/// assert_eq!(tree[0].file_count(), 1);
/// assert_eq!(tree[1].name, "README.md");
/// ```
pub fn build_file_tree(files: &[FileChange]) -> Vec<TreeNode> {
    let mut root = DirBuilder::default();
    for file in files {
        let segments: Vec<&str> = file.filename.split('/').collect();
        root.insert(&segments, file);
    }

    let nodes = root.into_nodes(None);
    log::debug!(
        "built file tree: {} top-level nodes for {} files",
        nodes.len(),
        files.len()
    );
    nodes
}

/// Mutable directory level used while inserting paths
#[derive(Debug, Default)]
struct DirBuilder<'a> {
    /// Subdirectories in first-seen order
    dirs: Vec<(&'a str, DirBuilder<'a>)>,
    /// Files in insertion order
    files: Vec<(&'a str, &'a FileChange)>,
}

impl<'a> DirBuilder<'a> {
    fn insert(&mut self, segments: &[&'a str], file: &'a FileChange) {
        match segments {
            [] => {}
            [name] => self.files.push((*name, file)),
            [dir, rest @ ..] => self.subdir(*dir).insert(rest, file),
        }
    }

    /// Reuse the directory named `name` at this level, creating it if needed
    fn subdir(&mut self, name: &'a str) -> &mut DirBuilder<'a> {
        let index = match self.dirs.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.dirs.push((name, DirBuilder::default()));
                self.dirs.len() - 1
            }
        };
        &mut self.dirs[index].1
    }

    /// Convert into sorted nodes, children before parents
    fn into_nodes(self, parent: Option<&str>) -> Vec<TreeNode> {
        let mut nodes = Vec::with_capacity(self.dirs.len() + self.files.len());

        for (name, builder) in self.dirs {
            let path = join_path(parent, name);
            let children = builder.into_nodes(Some(path.as_str()));
            nodes.push(TreeNode::directory(name, path, children));
        }

        for (name, file) in self.files {
            nodes.push(TreeNode::file(
                name,
                join_path(parent, name),
                file.additions,
                file.deletions,
            ));
        }

        nodes.sort_by(compare_nodes);
        nodes
    }
}

fn join_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}/{name}"),
        None => name.to_string(),
    }
}
