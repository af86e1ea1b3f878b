use icu_collator::{Collator, CollatorBorrowed};
use serde::Serialize;
use std::cmp::Ordering;

/// A file or directory in the changed-file forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Final path segment
    pub name: String,
    /// Segments from the forest root to this node, joined by `/`
    pub path: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Variant data for a [`TreeNode`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        additions: usize,
        deletions: usize,
    },
    Directory {
        children: Vec<TreeNode>,
        /// Number of files anywhere below this directory
        #[serde(rename = "fileCount")]
        file_count: usize,
        expanded: bool,
    },
}

impl TreeNode {
    pub fn file(name: &str, path: String, additions: usize, deletions: usize) -> Self {
        TreeNode {
            name: name.to_string(),
            path,
            kind: NodeKind::File {
                additions,
                deletions,
            },
        }
    }

    /// Directory node with `file_count` derived from `children`
    pub fn directory(name: &str, path: String, children: Vec<TreeNode>) -> Self {
        let file_count = children.iter().map(TreeNode::file_count).sum();
        TreeNode {
            name: name.to_string(),
            path,
            kind: NodeKind::Directory {
                children,
                file_count,
                expanded: true,
            },
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Files this node accounts for: 1 for a file, the subtree count for a directory
    pub fn file_count(&self) -> usize {
        match &self.kind {
            NodeKind::File { .. } => 1,
            NodeKind::Directory { file_count, .. } => *file_count,
        }
    }

    /// Child nodes; empty for files
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::File { .. } => &[],
            NodeKind::Directory { children, .. } => children,
        }
    }

    /// Whether the node's children should be shown. Files are never expanded.
    pub fn is_expanded(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { expanded: true, .. })
    }
}

/// Display ordering for siblings: directories first, then by name.
///
/// Names use Unicode collation with the root locale at default strength, the
/// same order a locale-aware string comparison gives: punctuation before
/// digits before letters, case only breaking ties (`apple < banana < Banana`).
/// Names the collator considers equal fall back to code point order.
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_directory()
        .cmp(&a.is_directory())
        .then_with(|| compare_names(&a.name, &b.name))
}

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        match Collator::try_new(Default::default(), Default::default()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                log::warn!("collation data unavailable, sorting by code point: {err}");
                None
            }
        };
}

fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
