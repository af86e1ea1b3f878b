mod build;
mod node;
mod view;

pub use build::build_file_tree;
pub use node::{NodeKind, TreeNode, compare_nodes};
pub use view::{RowKind, TreeRow, render_tree, set_expanded, toggle_expanded, visible_rows};
