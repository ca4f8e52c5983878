//! File tree view model.
//!
//! Turns the raw listing returned by the API into the items the sidebar
//! renders: directories get a display label, leaves are filtered, and
//! directories keep their label even when nothing below them survives.

use crate::model::TreeNode;

/// Decides which file leaves are surfaced in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Lowercased extensions, `None` accepts every file.
    extensions: Option<Vec<String>>,
}

impl FileFilter {
    /// Accept only files whose name ends in one of `extensions`.
    pub fn markdown(extensions: &[String]) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self {
            extensions: Some(extensions),
        }
    }

    /// Accept every file.
    pub fn any() -> Self {
        Self { extensions: None }
    }

    /// Whether a file named `name` should be shown.
    pub fn accepts(&self, name: &str) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };
        let lower = name.to_lowercase();
        extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{ext}")))
    }
}

/// A renderable entry of the file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeItem {
    /// An expandable directory label with its surviving children.
    Directory {
        label: String,
        path: String,
        children: Vec<TreeItem>,
    },
    /// A clickable document leaf.
    File { label: String, path: String },
}

impl TreeItem {
    pub fn label(&self) -> &str {
        match self {
            TreeItem::Directory { label, .. } | TreeItem::File { label, .. } => label,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeItem::Directory { path, .. } | TreeItem::File { path, .. } => path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TreeItem::File { .. })
    }
}

/// Display name of a directory: underscores become spaces.
pub fn directory_label(name: &str) -> String {
    name.replace('_', " ")
}

/// Build the renderable tree, preserving node order.
pub fn build_tree(nodes: &[TreeNode], filter: &FileFilter) -> Vec<TreeItem> {
    nodes
        .iter()
        .filter_map(|node| {
            if node.is_directory() {
                Some(TreeItem::Directory {
                    label: directory_label(&node.name),
                    path: node.path.clone(),
                    children: build_tree(&node.children, filter),
                })
            } else if filter.accepts(&node.name) {
                Some(TreeItem::File {
                    label: node.name.clone(),
                    path: node.path.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Number of clickable leaves in `items`, recursively.
pub fn count_leaves(items: &[TreeItem]) -> usize {
    items
        .iter()
        .map(|item| match item {
            TreeItem::File { .. } => 1,
            TreeItem::Directory { children, .. } => count_leaves(children),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::file("README.MD", "README.MD"),
            TreeNode::directory(
                "user_guide",
                "user_guide",
                vec![
                    TreeNode::file("setup.md", "user_guide/setup.md"),
                    TreeNode::file("diagram.png", "user_guide/diagram.png"),
                ],
            ),
            TreeNode::directory(
                "assets",
                "assets",
                vec![TreeNode::file("logo.svg", "assets/logo.svg")],
            ),
        ]
    }

    #[test]
    fn test_single_markdown_leaf() {
        let nodes = vec![TreeNode::file("guide.md", "guide.md")];
        let items = build_tree(&nodes, &FileFilter::markdown(&["md".to_string()]));

        assert_eq!(
            items,
            vec![TreeItem::File {
                label: "guide.md".to_string(),
                path: "guide.md".to_string(),
            }]
        );
    }

    #[test]
    fn test_strict_filter_counts_markdown_only() {
        let items = build_tree(&sample(), &FileFilter::markdown(&["md".to_string()]));
        assert_eq!(count_leaves(&items), 2);
    }

    #[test]
    fn test_lenient_filter_counts_every_file() {
        let items = build_tree(&sample(), &FileFilter::any());
        assert_eq!(count_leaves(&items), 4);
    }

    #[test]
    fn test_directory_without_matches_has_no_children() {
        let items = build_tree(&sample(), &FileFilter::markdown(&["md".to_string()]));
        let assets = items.iter().find(|item| item.path() == "assets").unwrap();

        match assets {
            TreeItem::Directory { children, .. } => assert!(children.is_empty()),
            TreeItem::File { .. } => panic!("assets should be a directory"),
        }
    }

    #[test]
    fn test_directory_label_normalization() {
        let items = build_tree(&sample(), &FileFilter::any());
        assert_eq!(items[1].label(), "user guide");
        assert_eq!(items[1].path(), "user_guide");
        assert!(!items[1].is_file());
    }

    #[test]
    fn test_filter_accepts_dotted_extensions() {
        let filter = FileFilter::markdown(&[".markdown".to_string(), "MD".to_string()]);
        assert!(filter.accepts("notes.markdown"));
        assert!(filter.accepts("notes.md"));
        assert!(!filter.accepts("notes.txt"));
        assert!(!filter.accepts("md"));
    }
}
